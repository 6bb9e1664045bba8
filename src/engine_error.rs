//! EngineError: Unified error type for prime-patterns public APIs
//!
//! The core algorithms are total over their inputs; errors only arise at the
//! checked entry points that validate a caller-supplied bound or point count
//! against the configured [`Limits`](crate::limits::Limits), and from
//! invariant validation.

use thiserror::Error;

/// Unified error type for prime-patterns operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The bound is negative or does not fit the platform word.
    #[error("invalid bound {0}: expected 0 <= bound <= usize::MAX")]
    InvalidBound(i64),
    /// The request would allocate more than the configured ceiling.
    #[error("{what} of {requested} exceeds the configured limit of {limit}")]
    ResourceExceeded {
        what: &'static str,
        requested: u64,
        limit: u64,
    },
    /// A derived value failed invariant validation.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl EngineError {
    /// The largest input that would have been accepted, for
    /// [`EngineError::ResourceExceeded`]. Hosts report this as the
    /// reduced-bound suggestion.
    pub fn suggested_bound(&self) -> Option<u64> {
        match self {
            EngineError::ResourceExceeded { limit, .. } => Some(*limit),
            _ => None,
        }
    }
}
