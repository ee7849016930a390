//! # semigroup-hilbert
//!
//! Invariants of the numerical semigroup generated by a finite set of coprime
//! positive integers: its gap set, its Frobenius number, and a sequence of
//! per-level polynomials describing a filtration of *delta sets* (subsets of
//! the non-gap domain gamma).
//!
//! ## Pipeline
//! - [`semigroup`]: validated [`Generators`](semigroup::Generators), membership
//!   sweep, gaps, Frobenius number, `c = frobenius + 1` and gamma.
//! - [`delta`]: minimal generators of a delta set and the level-by-level
//!   enumeration `D_0, ..., D_c`.
//! - [`hilbert`]: syzygy-corrected degrees accumulated through lifts, summed
//!   into one polynomial per level.
//!
//! ## Determinism
//!
//! Every stage is a pure function of the generator list. Levels keep their
//! delta sets in first-produced order, so repeated runs produce identical
//! output.
//!
//! ## Usage
//! ```
//! use semigroup_hilbert::prelude::*;
//!
//! let generators = Generators::new(vec![3, 4])?;
//! let report = HilbertPipeline::new(&generators, HilbertConfig::default())?.report()?;
//! assert_eq!(report.frobenius, 5);
//! assert_eq!(report.printed_levels().count(), 6);
//! # Ok::<(), semigroup_hilbert::hilbert_error::HilbertError>(())
//! ```

pub mod debug_invariants;
pub mod delta;
pub mod hilbert;
pub mod hilbert_error;
pub mod semigroup;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used types and entry points:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::delta::{DeltaLevels, DeltaSet, Removal, all_level_delta, delta_min};
    pub use crate::hilbert::{
        HilbertConfig, HilbertPipeline, HilbertPolynomial, HilbertReport, Polynomial,
        all_level_hilb_delta, get_poly_coef, get_polynomial,
    };
    pub use crate::hilbert_error::HilbertError;
    pub use crate::semigroup::{
        Gamma, Generators, SemigroupAnalysis, compute_gaps_and_frobenius, get_c, get_gamma,
    };
}
