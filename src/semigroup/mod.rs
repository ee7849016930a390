//! Numerical semigroups: validated generators, gap sets and the gamma domain.

pub mod analyzer;
pub mod gamma;
pub mod generators;

pub use analyzer::{
    SemigroupAnalysis, compute_gaps_and_frobenius, compute_numerical_semigroup,
    get_frobenius_number,
};
pub use gamma::{Gamma, get_c, get_gamma};
pub use generators::Generators;
