//! HilbertError: Unified error type for semigroup-hilbert public APIs
//!
//! Every fallible stage of the pipeline (generator validation, semigroup
//! analysis, delta enumeration, degree assignment) reports through this type.
//! Nothing is recovered locally: the computation is deterministic, so a
//! failure here always means the inputs or an internal invariant are wrong.

use thiserror::Error;

/// Unified error type for semigroup-hilbert operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HilbertError {
    /// No generators were supplied.
    #[error("Generator error: at least one generator is required")]
    EmptyGenerators,
    /// A generator was zero or negative.
    #[error("Generator error: generator `{0}` is not a positive integer")]
    NonPositiveGenerator(i64),
    /// The same generator appeared twice.
    #[error("Generator error: generator `{0}` is listed more than once")]
    DuplicateGenerator(u64),
    /// The generators share a common factor, so infinitely many gaps exist.
    #[error("Generator error: generators have gcd {gcd} (must be 1 for a finite gap set)")]
    NotCoprime { gcd: u64 },
    /// The membership bound overflows or cannot be allocated.
    #[error("Semigroup error: membership bound {limit} is too large to sweep")]
    LimitTooLarge { limit: u64 },
    /// The gap set is empty (1 is a generator), so no Frobenius number exists.
    #[error("Semigroup error: no gaps below the bound, Frobenius number undefined")]
    NoFrobeniusNumber,
    /// `get_max_number_of_complement` was asked about a delta equal to gamma.
    #[error("Syzygy error: delta of length {delta_len} covers gamma, complement is empty")]
    EmptyComplement { delta_len: usize },
    /// The lift of a delta at `level` has no recorded degree at `level - 1`.
    #[error("Degree error: lift {lift:?} of a level-{level} delta has no degree at level {}", .level.saturating_sub(1))]
    MissingLiftDegree { level: usize, lift: Vec<u64> },
    /// Syzygy correction exceeded the minimal-generator cardinality.
    #[error("Degree error: level-{level} delta {delta:?} has negative base degree {value}")]
    NegativeDegree {
        level: usize,
        delta: Vec<u64>,
        value: i64,
    },
    /// Enumeration ran out of delta sets before reaching the last level.
    #[error("Enumeration error: level {level} of {levels} has no delta sets (gamma too short)")]
    LevelsExhausted { level: usize, levels: usize },
    /// A structure failed its invariant check.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
