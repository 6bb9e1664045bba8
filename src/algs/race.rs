//! Prime race between the residue classes `6n - 1` and `6n + 1`.
//!
//! Every prime `p > 3` is coprime to 6, so `p mod 6` is 1 or 5. The race
//! series is the running lead of the `5 mod 6` class over the `1 mod 6`
//! class after each prime; 2 and 3 belong to neither class and are skipped.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::engine_error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residue {
    /// `p ≡ 1 (mod 6)`, the `6n + 1` class.
    OneModSix,
    /// `p ≡ 5 (mod 6)`, the `6n - 1` class.
    FiveModSix,
}

impl Residue {
    /// Contribution of this class to the running lead.
    #[inline]
    pub const fn step(self) -> i64 {
        match self {
            Residue::OneModSix => -1,
            Residue::FiveModSix => 1,
        }
    }
}

/// Residue class of `n` modulo 6, or `None` when `n` shares a factor with 6.
#[inline]
pub fn residue_mod6(n: u64) -> Option<Residue> {
    match n % 6 {
        1 => Some(Residue::OneModSix),
        5 => Some(Residue::FiveModSix),
        _ => None,
    }
}

/// Cumulative lead of the `5 mod 6` class after each prime `p > 3`.
///
/// `primes` must be ascending primes; the output has one entry per prime
/// above 3 and is empty if there is none.
pub fn compute_bias_series(primes: &[u64]) -> Vec<i64> {
    debug_assert!(
        primes.windows(2).all(|w| w[0] < w[1]),
        "compute_bias_series: primes must be strictly increasing"
    );
    primes
        .iter()
        .filter(|&&p| p > 3)
        .scan(0i64, |lead, &p| {
            *lead += match residue_mod6(p) {
                Some(Residue::FiveModSix) => 1,
                _ => -1,
            };
            Some(*lead)
        })
        .collect()
}

/// Aggregate view of a race series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    /// Number of primes that took part.
    pub len: usize,
    /// Lead after the last prime (0 for an empty race).
    pub final_lead: i64,
    /// Largest lead of the `5 mod 6` class.
    pub max_lead: i64,
    /// Most negative lead, i.e. the largest lead of the `1 mod 6` class.
    pub min_lead: i64,
    /// Positions where the classes are level.
    pub ties: usize,
    /// Times the leader switched from one class to the other.
    pub lead_changes: usize,
}

impl RaceSummary {
    pub fn from_series(series: &[i64]) -> Self {
        let mut summary = RaceSummary {
            len: series.len(),
            final_lead: series.last().copied().unwrap_or(0),
            max_lead: series.iter().copied().max().unwrap_or(0),
            min_lead: series.iter().copied().min().unwrap_or(0),
            ..Default::default()
        };
        let mut last_sign = 0i64;
        for &d in series {
            if d == 0 {
                summary.ties += 1;
                continue;
            }
            let sign = d.signum();
            if last_sign != 0 && sign != last_sign {
                summary.lead_changes += 1;
            }
            last_sign = sign;
        }
        summary
    }
}

/// A race series paired with the primes it was computed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSeries {
    pub primes: Vec<u64>,
    pub leads: Vec<i64>,
}

impl RaceSeries {
    pub fn new(primes: &[u64]) -> Self {
        let racing: Vec<u64> = primes.iter().copied().filter(|&p| p > 3).collect();
        let leads = compute_bias_series(&racing);
        Self {
            primes: racing,
            leads,
        }
    }

    pub fn summary(&self) -> RaceSummary {
        RaceSummary::from_series(&self.leads)
    }
}

impl DebugInvariants for RaceSeries {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "RaceSeries invalid");
    }

    fn validate_invariants(&self) -> Result<(), EngineError> {
        if self.primes.len() != self.leads.len() {
            return Err(EngineError::InvariantViolation(format!(
                "{} racing primes but {} leads",
                self.primes.len(),
                self.leads.len()
            )));
        }
        let mut prev = 0i64;
        for (&p, &d) in self.primes.iter().zip(&self.leads) {
            let Some(class) = residue_mod6(p) else {
                return Err(EngineError::InvariantViolation(format!(
                    "{p} is in neither residue class"
                )));
            };
            if d - prev != class.step() {
                return Err(EngineError::InvariantViolation(format!(
                    "lead moved from {prev} to {d} at {p}"
                )));
            }
            prev = d;
        }
        Ok(())
    }
}
