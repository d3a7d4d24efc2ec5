//! Error types reported by the evolution engine.

use thiserror::Error;

/// Errors that can abort an evolution run.
///
/// A run fails fast: the first invalid condition stops the engine before
/// the current generation applies selection or mutation, so the population
/// is left exactly as the last completed generation produced it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolveError {
    /// The population holds no genomes, so there is nothing to select from.
    #[error("cannot evolve an empty population")]
    EmptyPopulation,

    /// An evaluator returned a fitness that cannot be used as a selection
    /// weight. Selection weights must be finite and non-negative.
    #[error("fitness must be a non-negative finite number, got {value} for genome at index {index}")]
    InvalidFitness {
        /// Position of the offending genome in the population.
        index: usize,
        /// The fitness value the evaluator returned.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_population_display() {
        let err = EvolveError::EmptyPopulation;
        assert_eq!(err.to_string(), "cannot evolve an empty population");
    }

    #[test]
    fn test_invalid_fitness_display() {
        let err = EvolveError::InvalidFitness {
            index: 3,
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "fitness must be a non-negative finite number, got -1.5 for genome at index 3"
        );
    }

    #[test]
    fn test_invalid_fitness_reports_nan() {
        let err = EvolveError::InvalidFitness {
            index: 0,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(EvolveError::EmptyPopulation, EvolveError::EmptyPopulation);
        assert_ne!(
            EvolveError::EmptyPopulation,
            EvolveError::InvalidFitness {
                index: 0,
                value: 0.5
            }
        );
    }
}
