//! One bound in, every derived result out.
//!
//! [`Analysis::run`] sieves once and feeds the prime set to the gap analyzer
//! and the race tracker, which are independent of each other. With the
//! `rayon` feature they run on two workers; the results are identical either
//! way.

use serde::{Deserialize, Serialize};

use crate::algs::gaps::{GapBuckets, GapSummary, analyze_gaps};
use crate::algs::race::{RaceSeries, RaceSummary};
use crate::algs::spiral::{SpiralPoint, prime_points};
use crate::debug_invariants::DebugInvariants;
use crate::engine_error::EngineError;
use crate::limits::Limits;
use crate::sieve::PrimeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub primes: PrimeSet,
    pub gaps: GapBuckets,
    pub summary: GapSummary,
    pub race: RaceSeries,
}

impl Analysis {
    /// Validate `bound` against `limits`, sieve, and derive everything.
    ///
    /// # Errors
    /// * [`EngineError::InvalidBound`]: `bound < 0`.
    /// * [`EngineError::ResourceExceeded`]: `bound > limits.max_bound`.
    pub fn run(bound: i64, limits: &Limits) -> Result<Self, EngineError> {
        let primes = PrimeSet::try_generate(bound, limits)?;
        Ok(Self::from_primes(primes))
    }

    /// Derive gap buckets, summary and race from an existing prime set.
    pub fn from_primes(primes: PrimeSet) -> Self {
        #[cfg(feature = "rayon")]
        let (gaps, race) = rayon::join(
            || analyze_gaps(primes.as_slice()),
            || RaceSeries::new(primes.as_slice()),
        );
        #[cfg(not(feature = "rayon"))]
        let (gaps, race) = (
            analyze_gaps(primes.as_slice()),
            RaceSeries::new(primes.as_slice()),
        );
        let summary = GapSummary::new(primes.as_slice(), &gaps);
        log::debug!(
            "analysis to {}: {} primes, {} gap values, final race lead {}",
            primes.bound(),
            primes.len(),
            gaps.len(),
            race.leads.last().copied().unwrap_or(0)
        );
        let analysis = Self {
            primes,
            gaps,
            summary,
            race,
        };
        crate::debug_invariants!(analysis.validate_invariants(), "Analysis::from_primes");
        analysis
    }

    pub fn race_summary(&self) -> RaceSummary {
        self.race.summary()
    }

    /// Prime positions on a spiral of `count` points.
    ///
    /// Uses this analysis's primes when `count` is within its bound and sieves
    /// up to `count` otherwise.
    ///
    /// # Errors
    /// * [`EngineError::ResourceExceeded`]: `count > limits.max_spiral_points`.
    pub fn spiral_primes(&self, count: u64, limits: &Limits) -> Result<Vec<SpiralPoint>, EngineError> {
        let count = limits.check_spiral_points(count)?;
        if count as u64 <= self.primes.bound() {
            Ok(prime_points(count, self.primes.up_to(count as u64)))
        } else {
            Ok(prime_spiral(count))
        }
    }
}

/// Prime positions on a spiral of `count` points, sieving up to `count`.
pub fn prime_spiral(count: usize) -> Vec<SpiralPoint> {
    let primes = PrimeSet::generate(count as u64);
    prime_points(count, primes.as_slice())
}

impl DebugInvariants for Analysis {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Analysis invalid");
    }

    fn validate_invariants(&self) -> Result<(), EngineError> {
        self.primes.validate_invariants()?;
        self.gaps.validate_invariants()?;
        self.race.validate_invariants()?;
        let expected_pairs = self.primes.len().saturating_sub(1);
        if self.gaps.total_pairs() != expected_pairs {
            return Err(EngineError::InvariantViolation(format!(
                "{} gap pairs for {} primes",
                self.gaps.total_pairs(),
                self.primes.len()
            )));
        }
        Ok(())
    }
}
