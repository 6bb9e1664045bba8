//! Gap bucketing: group consecutive prime pairs by their difference.
//!
//! Within a bucket, pairs are kept in the order they were discovered, which is
//! ascending order of the smaller prime. Callers render "pairs in the order
//! discovered", so this ordering is part of the contract.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::engine_error::EngineError;

/// A pair of consecutive primes `(p, p_next)`.
pub type PrimePair = (u64, u64);

/// Mapping from gap value to the consecutive prime pairs with that gap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapBuckets {
    buckets: BTreeMap<u64, Vec<PrimePair>>,
}

/// Bucket consecutive pairs of `primes` by gap.
///
/// Empty and single-element inputs yield an empty mapping.
///
/// `primes` must be strictly increasing; this is checked in debug builds only.
pub fn analyze_gaps(primes: &[u64]) -> GapBuckets {
    debug_assert!(
        primes.windows(2).all(|w| w[0] < w[1]),
        "analyze_gaps: primes must be strictly increasing"
    );
    let mut buckets: BTreeMap<u64, Vec<PrimePair>> = BTreeMap::new();
    for (p, q) in primes.iter().copied().tuple_windows() {
        buckets.entry(q - p).or_default().push((p, q));
    }
    GapBuckets { buckets }
}

/// The `(p, gap)` series, one point per consecutive pair.
pub fn gap_series(primes: &[u64]) -> Vec<(u64, u64)> {
    primes
        .iter()
        .copied()
        .tuple_windows()
        .map(|(p, q)| (p, q - p))
        .collect()
}

impl GapBuckets {
    /// Pairs with the given gap, in discovery order.
    pub fn get(&self, gap: u64) -> Option<&[PrimePair]> {
        self.buckets.get(&gap).map(Vec::as_slice)
    }

    /// Number of pairs with the given gap (0 if absent).
    pub fn count(&self, gap: u64) -> usize {
        self.buckets.get(&gap).map_or(0, Vec::len)
    }

    /// Distinct gap values, ascending.
    pub fn gaps(&self) -> impl Iterator<Item = u64> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &[PrimePair])> + '_ {
        self.buckets.iter().map(|(&g, pairs)| (g, pairs.as_slice()))
    }

    /// Number of distinct gap values.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of pairs across all buckets (`len(primes) - 1`).
    pub fn total_pairs(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn max_gap(&self) -> Option<u64> {
        self.buckets.keys().next_back().copied()
    }

    /// Pairs belonging to a named gap class.
    pub fn class(&self, class: GapClass) -> &[PrimePair] {
        self.get(class.gap()).unwrap_or(&[])
    }
}

impl DebugInvariants for GapBuckets {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "GapBuckets invalid");
    }

    fn validate_invariants(&self) -> Result<(), EngineError> {
        for (&gap, pairs) in &self.buckets {
            if gap == 0 || pairs.is_empty() {
                return Err(EngineError::InvariantViolation(format!(
                    "bucket {gap} is zero or empty"
                )));
            }
            if let Some(&(p, q)) = pairs.iter().find(|&&(p, q)| q <= p || q - p != gap) {
                return Err(EngineError::InvariantViolation(format!(
                    "pair ({p}, {q}) filed under gap {gap}"
                )));
            }
            if pairs.windows(2).any(|w| w[0].0 >= w[1].0) {
                return Err(EngineError::InvariantViolation(format!(
                    "bucket {gap} is not in discovery order"
                )));
            }
        }
        Ok(())
    }
}

/// Named gap classes reported alongside the full bucket table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GapClass {
    /// Gap 2.
    Twin,
    /// Gap 4.
    Cousin,
    /// Gap 6.
    Sexy,
    /// Gap 8.
    Eight,
    /// Gap 10.
    Ten,
}

impl GapClass {
    pub const ALL: [GapClass; 5] = [
        GapClass::Twin,
        GapClass::Cousin,
        GapClass::Sexy,
        GapClass::Eight,
        GapClass::Ten,
    ];

    pub const fn gap(self) -> u64 {
        match self {
            GapClass::Twin => 2,
            GapClass::Cousin => 4,
            GapClass::Sexy => 6,
            GapClass::Eight => 8,
            GapClass::Ten => 10,
        }
    }

    pub fn from_gap(gap: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.gap() == gap)
    }
}

/// Headline statistics for one analysis: counts per named class, the prime
/// count and the largest gap seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSummary {
    pub prime_count: usize,
    pub max_gap: Option<u64>,
    class_counts: [usize; 5],
}

impl GapSummary {
    pub fn new(primes: &[u64], buckets: &GapBuckets) -> Self {
        Self {
            prime_count: primes.len(),
            max_gap: buckets.max_gap(),
            class_counts: GapClass::ALL.map(|c| buckets.count(c.gap())),
        }
    }

    pub fn count(&self, class: GapClass) -> usize {
        let i = GapClass::ALL
            .iter()
            .position(|&c| c == class)
            .unwrap_or_default();
        self.class_counts[i]
    }

    /// `(class, count)` in ascending gap order.
    pub fn class_counts(&self) -> impl Iterator<Item = (GapClass, usize)> + '_ {
        GapClass::ALL.into_iter().zip(self.class_counts)
    }
}
