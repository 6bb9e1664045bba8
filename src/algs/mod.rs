//! Re-export public algorithms.

pub mod gaps;
pub mod race;
pub mod spiral;

pub use gaps::{GapBuckets, GapClass, GapSummary, analyze_gaps, gap_series};
pub use race::{RaceSeries, RaceSummary, Residue, compute_bias_series, residue_mod6};
pub use spiral::{
    SpiralLayout, SpiralPoint, generate_spiral_coordinates, prime_points, spiral_coordinate,
    turns_at,
};
