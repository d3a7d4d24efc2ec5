//! Generic fitness-proportional evolution engine.
//!
//! A small, domain-agnostic genetic-search core: a fixed-size population of
//! genomes is repeatedly evaluated, resampled in proportion to fitness, and
//! mutated. There is no crossover and no elitism — selection pressure comes
//! entirely from resampling with replacement, diversity entirely from
//! mutation. The engine runs for exactly the requested number of
//! generations.
//!
//! # Core Traits
//!
//! - [`FitnessEvaluator`]: Scores a genome; higher is better, values must be
//!   finite and non-negative. Closures implement it automatically.
//! - [`MutationOperator`]: Perturbs a genome in place using the run RNG
//! - [`Genome`]: Marker for evolvable types; blanket-implemented for any
//!   `Clone + Send + Sync` type
//!
//! # Key Types
//!
//! - [`EvolutionEngine`]: Owns the two strategies and drives the loop
//! - [`Population`]: Ordered fixed-size collection of genomes
//! - [`EngineConfig`]: Seed and parallelism knobs
//! - [`GaussianMutation`]: Per-gene additive Gaussian noise for real-valued
//!   genomes
//! - [`EvolveReport`]: Best-ever genome plus per-generation statistics
//!
//! # Quick Start
//!
//! ```
//! use microevo::{
//!     EngineConfig, EvolutionEngine, GaussianMutation, Population, RealGenome, RealVector,
//! };
//!
//! // Fit a single parameter: reward genomes whose gene is close to 3.
//! let evaluator = |g: &RealVector| 1.0 / (1.0 + (g.genes()[0] - 3.0).powi(2));
//! let engine = EvolutionEngine::with_config(
//!     evaluator,
//!     GaussianMutation::uniform(0.2, 1),
//!     EngineConfig::default().with_seed(7),
//! );
//!
//! let mut population = Population::filled(50, RealVector::zeros(1));
//! let report = engine.evolve_with_report(&mut population, 120).unwrap();
//!
//! assert_eq!(population.len(), 50);
//! assert!(report.best_fitness > report.history[0].best_fitness);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod engine;
mod error;
pub mod genome;
pub mod operators;
mod population;
pub mod selection;
mod types;

pub use config::EngineConfig;
pub use engine::{EvolutionEngine, EvolveReport, GenerationStats};
pub use error::EvolveError;
pub use genome::{RealGenome, RealVector};
pub use operators::GaussianMutation;
pub use population::Population;
pub use types::{FitnessEvaluator, Genome, MutationOperator};
