//! The generational evolution loop.
//!
//! [`EvolutionEngine`] orchestrates the complete process:
//! evaluate → resample proportionally to fitness → mutate → repeat.
//! The engine runs for exactly the requested number of generations; there
//! is no early exit, no elitism, and no recombination. Selection pressure
//! comes entirely from resampling with replacement, diversity entirely
//! from mutation.

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::error::EvolveError;
use crate::population::Population;
use crate::selection;
use crate::types::{FitnessEvaluator, Genome, MutationOperator};

/// Per-generation population statistics.
///
/// Fitness values describe the population as it stood when the generation
/// was evaluated, before selection rewrote it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index. 0 is the initial population.
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness across the population.
    pub mean_fitness: f64,
}

/// Result of an instrumented evolution run.
///
/// Produced by [`EvolutionEngine::evolve_with_report`]. The plain
/// [`evolve`](EvolutionEngine::evolve) skips this bookkeeping entirely.
#[derive(Debug, Clone)]
pub struct EvolveReport<G> {
    /// The fittest genome observed at any point during the run.
    ///
    /// This is a snapshot: later mutations do not touch it, so it may no
    /// longer be present in the final population.
    pub best: G,

    /// Fitness of [`best`](EvolveReport::best) when it was observed.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Statistics for every evaluated state, generation 0 through
    /// `generations` inclusive (`generations + 1` entries).
    pub history: Vec<GenerationStats>,
}

/// Executes the evolutionary loop over a [`Population`].
///
/// The engine owns its two strategies and a run-level [`EngineConfig`].
/// It is stateless between runs: each `evolve*` call derives a fresh RNG
/// from the configured seed, so a seeded engine replays the same run every
/// time.
///
/// # Examples
///
/// ```
/// use microevo::{
///     EngineConfig, EvolutionEngine, GaussianMutation, Population, RealGenome, RealVector,
/// };
///
/// // Reward genomes near the origin.
/// let evaluator =
///     |g: &RealVector| 1.0 / (1.0 + g.genes().iter().map(|x| x * x).sum::<f64>());
/// let mutation = GaussianMutation::uniform(0.1, 2);
/// let config = EngineConfig::default().with_seed(42);
/// let engine = EvolutionEngine::with_config(evaluator, mutation, config);
///
/// let mut population = Population::filled(32, RealVector::filled(2, 3.0));
/// engine.evolve(&mut population, 25).unwrap();
/// assert_eq!(population.len(), 32);
/// ```
pub struct EvolutionEngine<F, M> {
    evaluator: F,
    mutator: M,
    config: EngineConfig,
}

impl<F, M> EvolutionEngine<F, M> {
    /// Creates an engine with the default configuration.
    pub fn new(evaluator: F, mutator: M) -> Self {
        Self::with_config(evaluator, mutator, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(evaluator: F, mutator: M, config: EngineConfig) -> Self {
        Self {
            evaluator,
            mutator,
            config,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn run_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}

impl<F, M> EvolutionEngine<F, M> {
    /// Evolves `population` in place for exactly `generations` generations.
    ///
    /// Each generation evaluates every genome, draws a full new population
    /// from the old one with probability proportional to fitness (with
    /// replacement, as independent copies), and mutates every drawn copy.
    /// With `generations == 0` the population is left untouched and the
    /// evaluator is never called.
    ///
    /// # Errors
    ///
    /// [`EvolveError::EmptyPopulation`] if `population` has no members.
    /// [`EvolveError::InvalidFitness`] if the evaluator returns a negative
    /// or non-finite value; the population is left as the last completed
    /// generation produced it.
    pub fn evolve<G>(
        &self,
        population: &mut Population<G>,
        generations: usize,
    ) -> Result<(), EvolveError>
    where
        G: Genome,
        F: FitnessEvaluator<G>,
        M: MutationOperator<G>,
    {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }

        let mut rng = self.run_rng();
        for _ in 0..generations {
            let weights = self.evaluate_weights(population.as_slice())?;
            self.advance(population, &weights, &mut rng);
        }
        Ok(())
    }

    /// Like [`evolve`](EvolutionEngine::evolve), but records per-generation
    /// statistics and the best genome seen.
    ///
    /// Costs one extra evaluation pass over the final population so the
    /// report covers every state the run produced. Given the same seed,
    /// the population ends up identical to a plain `evolve` call.
    ///
    /// # Errors
    ///
    /// Same conditions as [`evolve`](EvolutionEngine::evolve).
    pub fn evolve_with_report<G>(
        &self,
        population: &mut Population<G>,
        generations: usize,
    ) -> Result<EvolveReport<G>, EvolveError>
    where
        G: Genome,
        F: FitnessEvaluator<G>,
        M: MutationOperator<G>,
    {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }

        let mut rng = self.run_rng();
        let mut history = Vec::with_capacity(generations + 1);

        let mut weights = self.evaluate_weights(population.as_slice())?;
        let (best_index, mut best_fitness) = best_entry(&weights);
        let mut best = population.as_slice()[best_index].clone();
        history.push(stats_for(0, &weights));

        for generation in 1..=generations {
            self.advance(population, &weights, &mut rng);
            weights = self.evaluate_weights(population.as_slice())?;

            let (gen_best_index, gen_best_fitness) = best_entry(&weights);
            if gen_best_fitness > best_fitness {
                best = population.as_slice()[gen_best_index].clone();
                best_fitness = gen_best_fitness;
            }
            history.push(stats_for(generation, &weights));
        }

        Ok(EvolveReport {
            best,
            best_fitness,
            generations,
            history,
        })
    }

    /// Selection and mutation for one generation.
    ///
    /// `weights` must describe the current contents of `population`.
    fn advance<G>(&self, population: &mut Population<G>, weights: &[f64], rng: &mut StdRng)
    where
        G: Genome,
        M: MutationOperator<G>,
    {
        let drawn = selection::resample(weights, population.len(), rng);
        let mut next: Vec<G> = drawn
            .into_iter()
            .map(|index| population.as_slice()[index].clone())
            .collect();
        for genome in &mut next {
            self.mutator.mutate(genome, rng);
        }
        population.replace(next);
    }

    /// Evaluates every genome and validates the results as selection weights.
    fn evaluate_weights<G>(&self, genomes: &[G]) -> Result<Vec<f64>, EvolveError>
    where
        G: Genome,
        F: FitnessEvaluator<G>,
    {
        let weights = self.raw_weights(genomes);
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(EvolveError::InvalidFitness { index, value });
            }
        }
        Ok(weights)
    }

    #[cfg(feature = "parallel")]
    fn raw_weights<G>(&self, genomes: &[G]) -> Vec<f64>
    where
        G: Genome,
        F: FitnessEvaluator<G>,
    {
        if self.config.parallel {
            genomes
                .par_iter()
                .map(|genome| self.evaluator.evaluate(genome))
                .collect()
        } else {
            genomes
                .iter()
                .map(|genome| self.evaluator.evaluate(genome))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn raw_weights<G>(&self, genomes: &[G]) -> Vec<f64>
    where
        G: Genome,
        F: FitnessEvaluator<G>,
    {
        genomes
            .iter()
            .map(|genome| self.evaluator.evaluate(genome))
            .collect()
    }
}

/// Index and value of the highest weight. Ties keep the earliest index.
fn best_entry(weights: &[f64]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_value = weights[0];
    for (index, &value) in weights.iter().enumerate().skip(1) {
        if value > best_value {
            best_index = index;
            best_value = value;
        }
    }
    (best_index, best_value)
}

fn stats_for(generation: usize, weights: &[f64]) -> GenerationStats {
    let (_, best_fitness) = best_entry(weights);
    GenerationStats {
        generation,
        best_fitness,
        mean_fitness: weights.iter().sum::<f64>() / weights.len() as f64,
    }
}

// ============================================================================
// Tests
// ============================================================================
