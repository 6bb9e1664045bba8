//! Prime generation.
//!
//! [`generate_primes`] is the core entry point; [`PrimeSet`] wraps its output
//! together with the bound it was sieved for.

pub mod eratosthenes;
pub mod prime_set;

pub use eratosthenes::{generate_primes, sieve_flags, try_generate_primes};
pub use prime_set::PrimeSet;

/// Sieve bound equivalent to a run over the sequences `6k - 1` and `6k + 1`
/// for `k = 1..=order`.
///
/// Every prime of such a run (together with 2 and 3) is `<= 6 * order + 1`,
/// and every prime up to that bound is of one of the two forms, so sieving to
/// this bound yields exactly the same set. Saturates at `u64::MAX`.
pub fn bound_for_sequence_order(order: u64) -> u64 {
    order.saturating_mul(6).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_order_bound() {
        assert_eq!(bound_for_sequence_order(0), 1);
        assert_eq!(bound_for_sequence_order(10), 61);
        assert_eq!(bound_for_sequence_order(u64::MAX), u64::MAX);
    }

    #[test]
    fn order_ten_run_matches_six_k_forms() {
        // primes of the form 6k ± 1 for k <= 10, plus 2 and 3
        let mut expected = vec![2u64, 3];
        for k in 1..=10u64 {
            for candidate in [6 * k - 1, 6 * k + 1] {
                if (2..candidate).all(|d| candidate % d != 0) {
                    expected.push(candidate);
                }
            }
        }
        expected.sort_unstable();
        assert_eq!(generate_primes(bound_for_sequence_order(10)), expected);
    }
}
