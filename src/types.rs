//! Core trait definitions for the evolution engine.
//!
//! The two central traits — [`FitnessEvaluator`] and [`MutationOperator`] —
//! define the contract between the generic engine and domain-specific
//! strategy implementations. The engine itself never looks inside a genome;
//! everything it knows about the search space flows through these traits.

use rand::Rng;

/// Marker trait for genome types the engine can evolve.
///
/// A genome is an opaque candidate solution. The engine only needs to
/// deep-copy genomes during selection and hand them to the strategies, so
/// any `Clone + Send + Sync` type qualifies automatically via the blanket
/// implementation. Most callers use [`RealVector`](crate::genome::RealVector)
/// or their own struct and never implement this by hand.
pub trait Genome: Clone + Send + Sync {}

impl<T: Clone + Send + Sync> Genome for T {}

/// Scores a genome for selection.
///
/// Returned values are used directly as selection weights, so they must be
/// finite and non-negative; higher values mean a higher chance of being
/// resampled into the next generation. The engine validates every returned
/// value and aborts the run with
/// [`EvolveError::InvalidFitness`](crate::EvolveError::InvalidFitness) on the
/// first violation.
///
/// # Implementing
///
/// ```ignore
/// struct NearOrigin;
///
/// impl FitnessEvaluator<RealVector> for NearOrigin {
///     fn evaluate(&self, genome: &RealVector) -> f64 {
///         1.0 / (1.0 + genome.genes().iter().map(|g| g * g).sum::<f64>())
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// Evaluators must be `Send + Sync` because the engine may score the
/// population in parallel using rayon (see the `parallel` feature).
/// Evaluation takes `&self` and must not depend on call order.
pub trait FitnessEvaluator<G>: Send + Sync {
    /// Returns the fitness of `genome`.
    ///
    /// This is typically the most expensive operation of a run. Higher is
    /// better; the value must be finite and `>= 0.0`.
    fn evaluate(&self, genome: &G) -> f64;
}

/// Perturbs a genome in place.
///
/// The engine calls this exactly once per genome per generation, after
/// selection has filled the next generation with independent copies. All
/// randomness must come from the supplied `rng` so that seeded runs stay
/// reproducible.
///
/// # Implementing
///
/// ```ignore
/// struct FlipSign;
///
/// impl MutationOperator<RealVector> for FlipSign {
///     fn mutate<R: Rng>(&self, genome: &mut RealVector, rng: &mut R) {
///         let i = rng.random_range(0..genome.len());
///         genome[i] = -genome[i];
///     }
/// }
/// ```
pub trait MutationOperator<G>: Send + Sync {
    /// Mutates `genome` in place, drawing randomness from `rng`.
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);
}

impl<G, F> FitnessEvaluator<G> for F
where
    F: Fn(&G) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &G) -> f64 {
        self(genome)
    }
}
