//! `PrimeSet`: the sorted primes up to a bound, immutable once produced.

use serde::{Deserialize, Serialize};

use super::eratosthenes::{generate_primes, try_generate_primes};
use crate::debug_invariants::{DebugInvariants, check_strictly_increasing};
use crate::engine_error::EngineError;
use crate::limits::Limits;

/// Strictly increasing sequence of every prime `<= bound`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeSet {
    bound: u64,
    primes: Vec<u64>,
}

impl PrimeSet {
    /// Sieve all primes up to and including `bound`.
    pub fn generate(bound: u64) -> Self {
        let set = Self {
            bound,
            primes: generate_primes(bound),
        };
        crate::debug_invariants!(set.validate_invariants(), "PrimeSet::generate");
        set
    }

    /// Checked constructor; see [`try_generate_primes`] for the bound policy.
    pub fn try_generate(bound: i64, limits: &Limits) -> Result<Self, EngineError> {
        let primes = try_generate_primes(bound, limits)?;
        // check_bound accepted it, so it is non-negative
        Ok(Self {
            bound: bound as u64,
            primes,
        })
    }

    /// The inclusive bound this set was sieved for.
    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.primes.iter()
    }

    /// Largest prime in the set.
    pub fn last(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// Membership by binary search. Only meaningful for `n <= bound`.
    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }

    /// π(x): how many primes in the set are `<= x`.
    pub fn count_up_to(&self, x: u64) -> usize {
        self.primes.partition_point(|&p| p <= x)
    }

    /// The prefix of primes `<= x`.
    pub fn up_to(&self, x: u64) -> &[u64] {
        &self.primes[..self.count_up_to(x)]
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }
}

impl AsRef<[u64]> for PrimeSet {
    fn as_ref(&self) -> &[u64] {
        &self.primes
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}

impl DebugInvariants for PrimeSet {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PrimeSet invalid");
    }

    fn validate_invariants(&self) -> Result<(), EngineError> {
        check_strictly_increasing(&self.primes, "primes")?;
        if let Some(&first) = self.primes.first() {
            if first < 2 {
                return Err(EngineError::InvariantViolation(format!(
                    "{first} is not a prime"
                )));
            }
        }
        if let Some(&last) = self.primes.last() {
            if last > self.bound {
                return Err(EngineError::InvariantViolation(format!(
                    "prime {last} exceeds bound {}",
                    self.bound
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_has_twenty_five_primes() {
        let set = PrimeSet::generate(100);
        assert_eq!(set.len(), 25);
        assert_eq!(set.bound(), 100);
        assert_eq!(set.last(), Some(97));
    }

    #[test]
    fn empty_below_two() {
        for n in [0, 1] {
            let set = PrimeSet::generate(n);
            assert!(set.is_empty());
            assert_eq!(set.last(), None);
            set.validate_invariants().unwrap();
        }
    }

    #[test]
    fn lookup_helpers() {
        let set = PrimeSet::generate(50);
        assert!(set.contains(47));
        assert!(!set.contains(49));
        assert_eq!(set.count_up_to(10), 4);
        assert_eq!(set.count_up_to(1), 0);
        assert_eq!(set.up_to(12), &[2, 3, 5, 7, 11]);
        assert_eq!(set.up_to(1_000).len(), set.len());
    }

    #[test]
    fn checked_constructor_records_bound() {
        let set = PrimeSet::try_generate(20, &Limits::default()).unwrap();
        assert_eq!(set.bound(), 20);
        assert_eq!(set.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19]);
        assert!(PrimeSet::try_generate(-1, &Limits::default()).is_err());
    }

    #[test]
    fn invariants_catch_corruption() {
        let bad = PrimeSet {
            bound: 10,
            primes: vec![2, 3, 11],
        };
        assert!(matches!(
            bad.validate_invariants(),
            Err(EngineError::InvariantViolation(_))
        ));
        let unsorted = PrimeSet {
            bound: 10,
            primes: vec![3, 2],
        };
        assert!(unsorted.validate_invariants().is_err());
    }

    #[test]
    fn serializes_as_plain_data() {
        let set = PrimeSet::generate(10);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"bound":10,"primes":[2,3,5,7]}"#);
        let back: PrimeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
