//! Print the headline statistics for one bound.
//!
//! ```text
//! cargo run --example prime_report -- 30000
//! ```

use prime_patterns::prelude::*;

fn main() -> Result<(), EngineError> {
    let bound: i64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(601);

    let analysis = match global_cache().analysis(bound) {
        Ok(a) => a,
        Err(e) => {
            if let Some(limit) = e.suggested_bound() {
                eprintln!("{e}; try a bound of at most {limit}");
            }
            return Err(e);
        }
    };

    println!("primes up to {bound}: {}", analysis.primes.len());
    for (class, n) in analysis.summary.class_counts() {
        println!("  gap {:>2} ({class:?}): {n}", class.gap());
    }
    if let Some(g) = analysis.summary.max_gap {
        println!(
            "largest gap: {g}, first at {:?}",
            analysis.gaps.get(g).and_then(|pairs| pairs.first())
        );
    }

    let race = analysis.race_summary();
    println!(
        "6n-1 vs 6n+1: final lead {}, max {}, min {}, ties {}",
        race.final_lead, race.max_lead, race.min_lead, race.ties
    );

    let spiral = analysis.spiral_primes(121, global_cache().limits())?;
    println!("primes on an 11x11 spiral: {}", spiral.len());
    Ok(())
}
