//! Memory ceilings for the sieve marker array and the spiral point cloud.
//!
//! Both allocations are linear in their scalar input, so the host bounds the
//! input before invocation instead of interrupting a computation midway.

use crate::engine_error::EngineError;

/// Default ceiling on the sieve bound (a few million).
pub const DEFAULT_MAX_BOUND: u64 = 5_000_000;
/// Default ceiling on the number of spiral points.
pub const DEFAULT_MAX_SPIRAL_POINTS: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Limits {
    pub max_bound: u64,
    pub max_spiral_points: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bound: DEFAULT_MAX_BOUND,
            max_spiral_points: DEFAULT_MAX_SPIRAL_POINTS,
        }
    }
}

impl Limits {
    /// No ceilings beyond what the platform word can index.
    pub fn unbounded() -> Self {
        Self {
            max_bound: u64::MAX,
            max_spiral_points: u64::MAX,
        }
    }

    pub fn with_max_bound(mut self, max_bound: u64) -> Self {
        self.max_bound = max_bound;
        self
    }

    pub fn with_max_spiral_points(mut self, max_spiral_points: u64) -> Self {
        self.max_spiral_points = max_spiral_points;
        self
    }

    /// Validate a signed sieve bound and return it as an index width.
    ///
    /// # Errors
    /// * [`EngineError::InvalidBound`]: `n < 0`, or `n` does not fit `usize`.
    /// * [`EngineError::ResourceExceeded`]: `n > max_bound`.
    pub fn check_bound(&self, n: i64) -> Result<usize, EngineError> {
        let Ok(unsigned) = u64::try_from(n) else {
            log::warn!("rejecting negative sieve bound {n}");
            return Err(EngineError::InvalidBound(n));
        };
        if unsigned > self.max_bound {
            log::warn!(
                "sieve bound {unsigned} exceeds limit {}; suggest retrying with the limit",
                self.max_bound
            );
            return Err(EngineError::ResourceExceeded {
                what: "sieve bound",
                requested: unsigned,
                limit: self.max_bound,
            });
        }
        usize::try_from(unsigned).map_err(|_| {
            log::warn!("sieve bound {unsigned} does not fit the platform word");
            EngineError::InvalidBound(n)
        })
    }

    /// Validate a spiral point count.
    ///
    /// # Errors
    /// * [`EngineError::ResourceExceeded`]: `count > max_spiral_points`, or
    ///   `count` does not fit `usize`.
    pub fn check_spiral_points(&self, count: u64) -> Result<usize, EngineError> {
        let limit = self.max_spiral_points.min(usize::MAX as u64);
        if count > limit {
            log::warn!("spiral point count {count} exceeds limit {limit}");
            return Err(EngineError::ResourceExceeded {
                what: "spiral point count",
                requested: count,
                limit,
            });
        }
        Ok(count as usize)
    }
}
