//! Structural self-checks for gamma and the delta levels.

use crate::hilbert_error::HilbertError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), HilbertError>;

    /// Panic on the first violation when invariant checking is compiled in.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Turn a failed condition into [`HilbertError::InvariantViolation`].
#[inline]
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), HilbertError> {
    if cond {
        Ok(())
    } else {
        Err(HilbertError::InvariantViolation(msg()))
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled
/// (debug builds, or the `check-invariants` / `strict-invariants` features).
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_maps_false_to_violation() {
        assert!(ensure(true, || "unused".into()).is_ok());
        let err = ensure(false, || "gamma not sorted".into()).unwrap_err();
        assert_eq!(err, HilbertError::InvariantViolation("gamma not sorted".into()));
    }
}
