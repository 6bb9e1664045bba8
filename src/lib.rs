#![cfg_attr(docsrs, feature(doc_cfg))]
//! # prime-patterns
//!
//! prime-patterns is a small numeric analysis engine for inspecting patterns in the primes. Given a single bound it enumerates the primes, buckets the gaps between consecutive primes, lays the integers out on a square spiral, and tracks the race between the residue classes `6n - 1` and `6n + 1`.
//!
//! ## Features
//! - Sieve of Eratosthenes with an explicit, configurable memory ceiling
//! - Gap buckets that keep prime pairs in discovery order, plus named gap classes
//! - Square-spiral coordinates (walked or by random access) with a prime overlay
//! - Cumulative mod-6 race series and summary statistics
//! - `Arc`-sharing memoization keyed by bound, safe to use across threads
//!
//! ## Determinism
//!
//! Every component is a pure function of its scalar input. There is no
//! randomness and no floating point; repeated calls return identical values.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! prime-patterns = "0.1"
//! # Optional features:
//! # features = ["rayon", "check-invariants"]
//! ```
//!
//! ```rust
//! use prime_patterns::prelude::*;
//!
//! let primes = generate_primes(20);
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
//!
//! let gaps = analyze_gaps(&primes);
//! assert_eq!(gaps.get(4), Some(&[(7, 11), (13, 17)][..]));
//!
//! assert_eq!(compute_bias_series(&primes), vec![1, 0, 1, 0, 1, 0]);
//! assert_eq!(generate_spiral_coordinates(3), vec![(0, 0), (1, 0), (1, 1)]);
//! ```
//!
//! ## Bound policy
//! [`sieve::generate_primes`] takes an unsigned bound and returns an empty
//! sequence below 2. The checked entry points ([`sieve::try_generate_primes`],
//! [`analysis::Analysis::run`], [`cache::AnalysisCache`]) take a signed bound
//! and reject negatives with [`EngineError::InvalidBound`] and bounds above
//! [`Limits::max_bound`] with [`EngineError::ResourceExceeded`].

pub mod algs;
pub mod analysis;
pub mod cache;
pub mod debug_invariants;
pub mod engine_error;
pub mod limits;
pub mod sieve;

pub use debug_invariants::DebugInvariants;
pub use engine_error::EngineError;
pub use limits::Limits;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::gaps::{GapBuckets, GapClass, GapSummary, analyze_gaps, gap_series};
    pub use crate::algs::race::{RaceSeries, RaceSummary, Residue, compute_bias_series};
    pub use crate::algs::spiral::{
        SpiralLayout, SpiralPoint, generate_spiral_coordinates, prime_points,
    };
    pub use crate::analysis::{Analysis, prime_spiral};
    pub use crate::cache::{AnalysisCache, InvalidateCache, global_cache};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::engine_error::EngineError;
    pub use crate::limits::Limits;
    pub use crate::sieve::{PrimeSet, generate_primes, try_generate_primes};
}
