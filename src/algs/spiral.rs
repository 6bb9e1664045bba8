//! Square-spiral layout of the positive integers.
//!
//! Index 1 sits at the origin; the walk starts with direction `(0, -1)` and
//! rotates `(dx, dy) -> (-dy, dx)` at every corner, so the first step goes
//! right and each ring is walked up, left, down, then right (clockwise on a
//! screen whose y axis points down). Ring `k >= 1` holds indices
//! `(2k-1)² + 1 ..= (2k+1)²`, so the first `k²` indices (`k` odd) fill the
//! `k × k` square centred on the origin.
//!
//! Coordinates do not depend on primality; [`prime_points`] filters afterwards.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::engine_error::EngineError;
use crate::limits::Limits;

/// Lattice position of a 1-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpiralPoint {
    pub index: u64,
    pub x: i64,
    pub y: i64,
}

/// Corner test: true when the walk must turn before leaving `(x, y)`.
///
/// Evaluated on the position *before* the step. The three arms are the
/// diagonal corners (`x == y`), the corner on the anti-diagonal in the left
/// half, and the corner one past the anti-diagonal in the right half, where
/// the walk leaves the previous ring.
#[inline]
pub fn turns_at(x: i64, y: i64) -> bool {
    x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y)
}

/// Coordinates for indices `1..=count`; entry `i - 1` belongs to index `i`.
pub fn generate_spiral_coordinates(count: usize) -> Vec<(i64, i64)> {
    let mut coords = Vec::with_capacity(count);
    if count == 0 {
        return coords;
    }
    let (mut x, mut y) = (0i64, 0i64);
    let (mut dx, mut dy) = (0i64, -1i64);
    coords.push((x, y));
    for _ in 2..=count {
        if turns_at(x, y) {
            (dx, dy) = (-dy, dx);
        }
        x += dx;
        y += dy;
        coords.push((x, y));
    }
    coords
}

/// Random access to the coordinate of a single index without walking the
/// spiral. Agrees with [`generate_spiral_coordinates`]; `None` for index 0.
pub fn spiral_coordinate(index: u64) -> Option<(i64, i64)> {
    if index == 0 {
        return None;
    }
    if index == 1 {
        return Some((0, 0));
    }
    let t = (index - 1).isqrt();
    let k = (t + 1) / 2;
    let inner = (2 * k - 1) * (2 * k - 1);
    let offset = index - inner - 1;
    let side = offset / (2 * k);
    let s = (offset % (2 * k)) as i64;
    let k = k as i64;
    Some(match side {
        0 => (k, -k + 1 + s),
        1 => (k - 1 - s, k),
        2 => (-k, k - 1 - s),
        _ => (-k + 1 + s, -k),
    })
}

/// [`generate_spiral_coordinates`] with the index attached.
pub fn spiral_points(count: usize) -> Vec<SpiralPoint> {
    generate_spiral_coordinates(count)
        .into_iter()
        .zip(1u64..)
        .map(|((x, y), index)| SpiralPoint { index, x, y })
        .collect()
}

/// Checked [`spiral_points`] for caller-supplied counts.
///
/// # Errors
/// * [`EngineError::ResourceExceeded`]: `count > limits.max_spiral_points`.
pub fn try_spiral_points(count: u64, limits: &Limits) -> Result<Vec<SpiralPoint>, EngineError> {
    let count = limits.check_spiral_points(count)?;
    Ok(spiral_points(count))
}

/// Points of the spiral over `1..=count` whose index is in `primes`.
///
/// `primes` must be ascending; entries above `count` are ignored.
pub fn prime_points(count: usize, primes: &[u64]) -> Vec<SpiralPoint> {
    let coords = generate_spiral_coordinates(count);
    primes
        .iter()
        .take_while(|&&p| p <= count as u64)
        .filter(|&&p| p >= 1)
        .map(|&p| {
            let (x, y) = coords[(p - 1) as usize];
            SpiralPoint { index: p, x, y }
        })
        .collect()
}

/// A generated layout, kept together with its count for validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiralLayout {
    pub points: Vec<SpiralPoint>,
}

impl SpiralLayout {
    pub fn new(count: usize) -> Self {
        Self {
            points: spiral_points(count),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Half-width of the smallest origin-centred square covering the layout.
    pub fn radius(&self) -> i64 {
        self.points
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .max()
            .unwrap_or(0)
    }
}

impl DebugInvariants for SpiralLayout {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SpiralLayout invalid");
    }

    fn validate_invariants(&self) -> Result<(), EngineError> {
        use std::collections::HashSet;

        let mut seen = HashSet::with_capacity(self.points.len());
        for (i, pt) in self.points.iter().enumerate() {
            if pt.index != i as u64 + 1 {
                return Err(EngineError::InvariantViolation(format!(
                    "point {i} carries index {}",
                    pt.index
                )));
            }
            if !seen.insert((pt.x, pt.y)) {
                return Err(EngineError::InvariantViolation(format!(
                    "index {} revisits ({}, {})",
                    pt.index, pt.x, pt.y
                )));
            }
        }
        if let Some(w) = self
            .points
            .windows(2)
            .find(|w| (w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs() != 1)
        {
            return Err(EngineError::InvariantViolation(format!(
                "indices {} and {} are not lattice neighbours",
                w[0].index, w[1].index
            )));
        }
        Ok(())
    }
}
