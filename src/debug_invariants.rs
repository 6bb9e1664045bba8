use crate::engine_error::EngineError;

/// Trait for validating the invariants of derived analysis values.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), EngineError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Check that `values` is strictly increasing, naming `what` in the error.
pub(crate) fn check_strictly_increasing(values: &[u64], what: &str) -> Result<(), EngineError> {
    match values.windows(2).position(|w| w[0] >= w[1]) {
        Some(i) => Err(EngineError::InvariantViolation(format!(
            "{what} not strictly increasing at position {i}: {} then {}",
            values[i],
            values[i + 1]
        ))),
        None => Ok(()),
    }
}
