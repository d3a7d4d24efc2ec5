//! Population container.

use crate::types::Genome;

/// An ordered, fixed-size collection of genomes.
///
/// The engine treats the population as a value it rewrites generation by
/// generation: its size never changes once created, and members are only
/// replaced wholesale, never edited through shared references.
#[derive(Clone, Debug, PartialEq)]
pub struct Population<G> {
    genomes: Vec<G>,
}

impl<G: Genome> Population<G> {
    /// Creates a population from explicit genomes.
    pub fn from_genomes(genomes: Vec<G>) -> Self {
        Self { genomes }
    }

    /// Creates a population of `count` copies of `prototype`.
    pub fn filled(count: usize, prototype: G) -> Self {
        Self {
            genomes: vec![prototype; count],
        }
    }

    /// Creates a population by calling `init` once per member.
    ///
    /// ```
    /// use microevo::{Population, RealVector};
    ///
    /// let mut next = 0.0;
    /// let population = Population::generate(3, || {
    ///     next += 1.0;
    ///     RealVector::filled(2, next)
    /// });
    /// assert_eq!(population.len(), 3);
    /// assert_eq!(population.get(2), Some(&RealVector::filled(2, 3.0)));
    /// ```
    pub fn generate(count: usize, mut init: impl FnMut() -> G) -> Self {
        Self {
            genomes: (0..count).map(|_| init()).collect(),
        }
    }

    /// Number of genomes.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Returns `true` if the population holds no genomes.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// The genomes as a slice, in population order.
    pub fn as_slice(&self) -> &[G] {
        &self.genomes
    }

    /// Returns the genome at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&G> {
        self.genomes.get(index)
    }

    /// Iterates over the genomes in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.genomes.iter()
    }

    /// Consumes the population and returns its genomes.
    pub fn into_genomes(self) -> Vec<G> {
        self.genomes
    }

    /// Swaps in the next generation. The size must match.
    pub(crate) fn replace(&mut self, genomes: Vec<G>) {
        debug_assert_eq!(
            self.genomes.len(),
            genomes.len(),
            "a generation must not change the population size"
        );
        self.genomes = genomes;
    }
}

impl<'a, G: Genome> IntoIterator for &'a Population<G> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::RealVector;

    #[test]
    fn test_filled_clones_prototype() {
        let population = Population::filled(4, RealVector::zeros(2));
        assert_eq!(population.len(), 4);
        for genome in &population {
            assert_eq!(genome, &RealVector::zeros(2));
        }
    }

    #[test]
    fn test_generate_calls_init_per_member() {
        let mut calls = 0;
        let population = Population::generate(5, || {
            calls += 1;
            vec![calls as f64]
        });
        assert_eq!(calls, 5);
        assert_eq!(population.get(0), Some(&vec![1.0]));
        assert_eq!(population.get(4), Some(&vec![5.0]));
    }

    #[test]
    fn test_from_genomes_keeps_order() {
        let genomes = vec![
            RealVector::from([1.0]),
            RealVector::from([2.0]),
            RealVector::from([3.0]),
        ];
        let population = Population::from_genomes(genomes.clone());
        assert_eq!(population.as_slice(), genomes.as_slice());
        assert_eq!(population.into_genomes(), genomes);
    }

    #[test]
    fn test_empty_population() {
        let population = Population::<RealVector>::from_genomes(Vec::new());
        assert!(population.is_empty());
        assert_eq!(population.len(), 0);
        assert_eq!(population.get(0), None);
    }

    #[test]
    fn test_replace_swaps_contents() {
        let mut population = Population::filled(2, RealVector::zeros(1));
        population.replace(vec![RealVector::from([1.0]), RealVector::from([2.0])]);
        assert_eq!(population.get(0), Some(&RealVector::from([1.0])));
        assert_eq!(population.get(1), Some(&RealVector::from([2.0])));
        assert_eq!(population.len(), 2);
    }
}
