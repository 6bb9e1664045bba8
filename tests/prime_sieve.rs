mod util;
use util::*;

use prime_patterns::prelude::*;
use prime_patterns::sieve::{bound_for_sequence_order, sieve_flags};
use proptest::prelude::*;

#[test]
fn thirty() {
    assert_eq!(generate_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

#[test]
fn hundred_has_twenty_five() {
    assert_eq!(generate_primes(100).len(), 25);
}

#[test]
fn below_two_is_empty() {
    assert!(generate_primes(0).is_empty());
    assert!(generate_primes(1).is_empty());
    assert_eq!(generate_primes(2), vec![2]);
}

#[test]
fn matches_trial_division_up_to_two_thousand() {
    assert_eq!(generate_primes(2_000), primes_trial(2_000));
}

#[test]
fn idempotent() {
    assert_eq!(generate_primes(10_007), generate_primes(10_007));
}

#[test]
fn known_prime_counts() {
    // π(10^k)
    for (n, pi) in [(10u64, 4usize), (1_000, 168), (10_000, 1_229), (100_000, 9_592), (1_000_000, 78_498)] {
        assert_eq!(generate_primes(n).len(), pi, "π({n})");
    }
}

#[test]
fn flags_agree_with_list() {
    let flags = sieve_flags(500);
    let listed: Vec<u64> = flags
        .iter()
        .enumerate()
        .filter(|&(_, &f)| f)
        .map(|(i, _)| i as u64)
        .collect();
    assert_eq!(listed, generate_primes(500));
}

#[test]
fn checked_policy_is_consistent() {
    let lim = Limits::default().with_max_bound(10_000);
    assert_eq!(try_generate_primes(-1, &lim), Err(EngineError::InvalidBound(-1)));
    assert_eq!(try_generate_primes(0, &lim), Ok(vec![]));
    assert_eq!(try_generate_primes(1, &lim), Ok(vec![]));
    assert_eq!(try_generate_primes(10_000, &lim), Ok(generate_primes(10_000)));
    let err = try_generate_primes(10_001, &lim).unwrap_err();
    assert_eq!(err.suggested_bound(), Some(10_000));
}

#[test]
fn sequence_order_run_of_five_thousand() {
    let primes = generate_primes(bound_for_sequence_order(5_000));
    assert_eq!(primes.last(), Some(&29_989));
    assert!(primes.iter().skip(2).all(|p| p % 6 == 1 || p % 6 == 5));
}

#[test]
fn prime_set_invariants_hold() {
    for n in [0u64, 1, 2, 3, 97, 1_000] {
        PrimeSet::generate(n).validate_invariants().unwrap();
    }
}

proptest! {
    #[test]
    fn prop_sieve_matches_oracle(n in 0u64..3_000) {
        let primes = generate_primes(n);
        prop_assert_eq!(&primes, &primes_trial(n));
        assert_strictly_increasing(&primes);
        prop_assert!(primes.iter().all(|&p| p <= n));
    }

    #[test]
    fn prop_prefix_restriction(n in 2u64..5_000, x in 0u64..5_000) {
        let set = PrimeSet::generate(n);
        let x = x.min(n);
        let direct = generate_primes(x);
        prop_assert_eq!(set.up_to(x), direct.as_slice());
        prop_assert_eq!(set.count_up_to(x), direct.len());
    }
}
