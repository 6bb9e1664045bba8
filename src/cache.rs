//! Memoization of analysis results keyed by their scalar input.
//!
//! The engine itself is pure; [`AnalysisCache`] is the layer a host puts in
//! front of it so repeated requests for the same bound (or spiral count) read
//! a shared result instead of recomputing. Values are `Arc`s: readers share
//! one allocation and never observe a partially built entry.
//!
//! Two threads missing the same key at once may both compute it; the first
//! insert wins and both callers receive that value.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::algs::spiral::SpiralLayout;
use crate::analysis::Analysis;
use crate::engine_error::EngineError;
use crate::limits::Limits;
use crate::sieve::PrimeSet;

/// Anything that caches derived results should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute.
    fn invalidate_cache(&mut self);
}

// Blanket impl for Box<T>
impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}

#[derive(Debug, Default)]
pub struct AnalysisCache {
    limits: Limits,
    primes: DashMap<u64, Arc<PrimeSet>>,
    analyses: DashMap<u64, Arc<Analysis>>,
    spirals: DashMap<usize, Arc<SpiralLayout>>,
}

static GLOBAL: Lazy<AnalysisCache> = Lazy::new(AnalysisCache::default);

/// Process-wide cache with default [`Limits`].
pub fn global_cache() -> &'static AnalysisCache {
    &GLOBAL
}

impl AnalysisCache {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Primes up to `bound`, sieved on first request.
    ///
    /// # Errors
    /// Same as [`PrimeSet::try_generate`].
    pub fn primes(&self, bound: i64) -> Result<Arc<PrimeSet>, EngineError> {
        let key = self.limits.check_bound(bound)? as u64;
        if let Some(hit) = self.primes.get(&key) {
            log::debug!("prime cache hit for bound {key}");
            return Ok(Arc::clone(hit.value()));
        }
        log::debug!("prime cache miss for bound {key}");
        let fresh = Arc::new(PrimeSet::generate(key));
        Ok(Arc::clone(self.primes.entry(key).or_insert(fresh).value()))
    }

    /// Full analysis for `bound`, reusing cached primes when present.
    ///
    /// # Errors
    /// Same as [`Analysis::run`].
    pub fn analysis(&self, bound: i64) -> Result<Arc<Analysis>, EngineError> {
        let key = self.limits.check_bound(bound)? as u64;
        if let Some(hit) = self.analyses.get(&key) {
            log::debug!("analysis cache hit for bound {key}");
            return Ok(Arc::clone(hit.value()));
        }
        log::debug!("analysis cache miss for bound {key}");
        let primes = self.primes(bound)?;
        let fresh = Arc::new(Analysis::from_primes(PrimeSet::clone(&primes)));
        Ok(Arc::clone(self.analyses.entry(key).or_insert(fresh).value()))
    }

    /// Spiral layout of `count` points.
    ///
    /// # Errors
    /// * [`EngineError::ResourceExceeded`]: `count > max_spiral_points`.
    pub fn spiral(&self, count: u64) -> Result<Arc<SpiralLayout>, EngineError> {
        let key = self.limits.check_spiral_points(count)?;
        if let Some(hit) = self.spirals.get(&key) {
            log::debug!("spiral cache hit for {key} points");
            return Ok(Arc::clone(hit.value()));
        }
        log::debug!("spiral cache miss for {key} points");
        let fresh = Arc::new(SpiralLayout::new(key));
        Ok(Arc::clone(self.spirals.entry(key).or_insert(fresh).value()))
    }

    /// Number of cached entries across all tables.
    pub fn len(&self) -> usize {
        self.primes.len() + self.analyses.len() + self.spirals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Callers holding an `Arc` keep their value.
    pub fn clear(&self) {
        self.primes.clear();
        self.analyses.clear();
        self.spirals.clear();
    }
}

impl InvalidateCache for AnalysisCache {
    fn invalidate_cache(&mut self) {
        self.clear();
    }
}
