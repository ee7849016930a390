//! Syzygy counting, level degrees and the Hilbert polynomials built from them.

pub mod degree;
pub mod pipeline;
pub mod polynomial;
pub mod syzygy;

pub use degree::{DegreeTable, LevelDegrees, all_level_degrees, all_level_hilb_delta, level_degrees};
pub use pipeline::{HilbertConfig, HilbertPipeline, HilbertReport, get_poly_coef, get_polynomial};
pub use polynomial::{HilbertPolynomial, Polynomial};
pub use syzygy::{
    calculate_cardinality_syzygy, calculate_syzygy_delta, get_m_delta,
    get_max_number_of_complement,
};
