//! Sieve of Eratosthenes over a dense boolean marker array.
//!
//! ## Complexity
//! - Time: **O(n log log n)**
//! - Space: **O(n)** bytes for the marker array, which is why callers cap the
//!   bound through [`Limits`].

use crate::engine_error::EngineError;
use crate::limits::Limits;

/// Marker array for `0..=n`: `flags[i]` is true iff `i` is prime.
///
/// Multiples of each surviving candidate `p <= ⌊√n⌋` are cleared starting at
/// `p * p`; smaller multiples were already cleared by a smaller factor.
///
/// # Panics
/// If the marker array cannot be allocated. Bound `n` with
/// [`Limits::check_bound`] first when it comes from an untrusted caller.
pub fn sieve_flags(n: usize) -> Vec<bool> {
    let mut flags = vec![true; n.saturating_add(1)];
    flags[0] = false;
    if n >= 1 {
        flags[1] = false;
    }
    for p in 2..=n.isqrt() {
        if flags[p] {
            for multiple in (p * p..=n).step_by(p) {
                flags[multiple] = false;
            }
        }
    }
    flags
}

/// All primes `<= n` in ascending order. Empty for `n < 2`.
///
/// Deterministic: the output for a fixed `n` never changes.
///
/// # Panics
/// If the marker array cannot be allocated; see [`try_generate_primes`].
pub fn generate_primes(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    let flags = sieve_flags(n);
    let primes: Vec<u64> = flags
        .iter()
        .enumerate()
        .filter_map(|(i, &is_prime)| is_prime.then_some(i as u64))
        .collect();
    log::debug!("sieved {} primes up to {n}", primes.len());
    primes
}

/// Checked variant of [`generate_primes`] for caller-supplied bounds.
///
/// `0` and `1` are valid and yield an empty sequence.
///
/// # Errors
/// * [`EngineError::InvalidBound`]: `n` is negative or wider than `usize`.
/// * [`EngineError::ResourceExceeded`]: `n` is above `limits.max_bound`.
pub fn try_generate_primes(n: i64, limits: &Limits) -> Result<Vec<u64>, EngineError> {
    let n = limits.check_bound(n)?;
    Ok(generate_primes(n as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_for_tiny_bounds() {
        assert_eq!(sieve_flags(0), vec![false]);
        assert_eq!(sieve_flags(1), vec![false, false]);
        assert_eq!(sieve_flags(2), vec![false, false, true]);
        assert_eq!(
            sieve_flags(10),
            vec![false, false, true, true, false, true, false, true, false, false, false]
        );
    }

    #[test]
    fn primes_up_to_thirty() {
        assert_eq!(
            generate_primes(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn bound_is_inclusive() {
        assert_eq!(generate_primes(29).last(), Some(&29));
        assert_eq!(generate_primes(28).last(), Some(&23));
    }

    #[test]
    fn perfect_squares_of_primes_are_cleared() {
        let flags = sieve_flags(169);
        for sq in [4usize, 9, 25, 49, 121, 169] {
            assert!(!flags[sq], "{sq} should be composite");
        }
    }

    #[test]
    fn checked_entry_point_applies_policy() {
        let lim = Limits::default().with_max_bound(100);
        assert_eq!(try_generate_primes(-5, &lim), Err(EngineError::InvalidBound(-5)));
        assert_eq!(try_generate_primes(1, &lim), Ok(vec![]));
        assert_eq!(try_generate_primes(100, &lim).map(|p| p.len()), Ok(25));
        assert!(matches!(
            try_generate_primes(101, &lim),
            Err(EngineError::ResourceExceeded { .. })
        ));
    }
}
