//! Fitness-proportionate resampling.
//!
//! Each generation is drawn from the previous one by roulette-wheel
//! sampling **with replacement**: a genome's chance of being drawn on each
//! spin is its weight divided by the population total, and nothing survives
//! unless it is drawn. Strong genomes therefore tend to appear several
//! times in the next generation while weak ones disappear.
//!
//! # References
//!
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Draws `draws` population indices proportional to `weights`.
///
/// Sampling is with replacement, so the same index may appear any number
/// of times. Weights must be finite and non-negative; the engine validates
/// fitness values before calling this. A zero-weight index is never drawn
/// as long as some weight is positive. When every weight is zero there is
/// no gradient to follow and sampling falls back to uniform.
///
/// # Panics
/// Panics if `weights` is empty.
///
/// # Complexity
/// O(n + draws · log n) via a cumulative-weight table and binary search.
pub fn resample<R: Rng>(weights: &[f64], draws: usize, rng: &mut R) -> Vec<usize> {
    assert!(
        !weights.is_empty(),
        "cannot resample from an empty population"
    );

    let n = weights.len();
    if n == 1 {
        return vec![0; draws];
    }

    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0;
    for &w in weights {
        debug_assert!(
            w.is_finite() && w >= 0.0,
            "selection weights must be non-negative finite numbers, got {w}"
        );
        total += w;
        cumulative.push(total);
    }

    if total <= 0.0 {
        return (0..draws).map(|_| rng.random_range(0..n)).collect();
    }

    (0..draws)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            // First index whose cumulative weight exceeds the threshold.
            let index = cumulative.partition_point(|&c| c <= threshold);
            index.min(n - 1) // floating-point fallback
        })
        .collect()
}
