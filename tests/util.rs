#![allow(dead_code)]

/// Trial division, the reference the sieve is checked against.
pub fn is_prime_trial(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Primes up to `n` by trial division. Quadratic; small `n` only.
pub fn primes_trial(n: u64) -> Vec<u64> {
    (0..=n).filter(|&k| is_prime_trial(k)).collect()
}

/// Assert the slice is strictly increasing.
pub fn assert_strictly_increasing(xs: &[u64]) {
    if let Some(i) = xs.windows(2).position(|w| w[0] >= w[1]) {
        panic!("not strictly increasing at {i}: {} then {}", xs[i], xs[i + 1]);
    }
}
