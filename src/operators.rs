//! Mutation operators for real-valued genomes.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::genome::RealGenome;
use crate::types::MutationOperator;

/// Additive Gaussian mutation with a per-gene scale.
///
/// Every application perturbs every gene: gene `i` receives independent
/// noise drawn from a normal distribution with mean zero and standard
/// deviation `scales[i]`. A scale of zero leaves its gene bit-for-bit
/// untouched, so a sparse scale vector freezes part of the genome.
///
/// # Examples
///
/// ```
/// use microevo::GaussianMutation;
///
/// // Strong noise on the first gene, none on the second.
/// let op = GaussianMutation::new(vec![0.5, 0.0]);
/// assert_eq!(op.arity(), 2);
///
/// // The same scale for every gene of a 10-gene genome.
/// let op = GaussianMutation::uniform(0.1, 10);
/// assert_eq!(op.arity(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct GaussianMutation {
    perturbations: Vec<Normal<f64>>,
}

impl GaussianMutation {
    /// Creates an operator with one scale (standard deviation) per gene.
    ///
    /// # Panics
    /// Panics if any scale is negative or non-finite.
    pub fn new(scales: Vec<f64>) -> Self {
        let perturbations = scales
            .iter()
            .map(|&scale| {
                assert!(
                    scale.is_finite() && scale >= 0.0,
                    "mutation scale must be a non-negative finite number, got {scale}"
                );
                Normal::new(0.0, scale).expect("scale is a valid standard deviation")
            })
            .collect();
        Self { perturbations }
    }

    /// Creates an operator applying the same `scale` to every one of
    /// `arity` genes.
    pub fn uniform(scale: f64, arity: usize) -> Self {
        Self::new(vec![scale; arity])
    }

    /// Number of genes this operator expects.
    pub fn arity(&self) -> usize {
        self.perturbations.len()
    }
}

impl<G: RealGenome> MutationOperator<G> for GaussianMutation {
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        let genes = genome.genes_mut();
        assert_eq!(
            genes.len(),
            self.perturbations.len(),
            "genome arity does not match the operator's scales"
        );
        for (gene, noise) in genes.iter_mut().zip(&self.perturbations) {
            *gene += noise.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::RealVector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_scale_is_identity() {
        let op = GaussianMutation::uniform(0.0, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut genome = RealVector::from([1.0, -2.5, 0.0]);
        let original = genome.clone();

        for _ in 0..100 {
            op.mutate(&mut genome, &mut rng);
        }
        assert_eq!(genome, original);
    }

    #[test]
    fn test_positive_scale_perturbs_every_gene() {
        let op = GaussianMutation::uniform(1.0, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut genome = RealVector::zeros(4);

        op.mutate(&mut genome, &mut rng);
        for &gene in genome.genes() {
            assert!(gene != 0.0, "expected every gene perturbed, got {genome:?}");
        }
    }

    #[test]
    fn test_per_gene_scales_apply_independently() {
        let op = GaussianMutation::new(vec![0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut genome = RealVector::from([3.0, 3.0]);

        op.mutate(&mut genome, &mut rng);
        assert_eq!(genome[0], 3.0);
        assert!(genome[1] != 3.0);
    }

    #[test]
    fn test_same_seed_same_perturbation() {
        let op = GaussianMutation::uniform(0.5, 3);
        let mut a = RealVector::zeros(3);
        let mut b = RealVector::zeros(3);

        op.mutate(&mut a, &mut StdRng::seed_from_u64(123));
        op.mutate(&mut b, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_statistics_match_scale() {
        let scale = 2.0;
        let op = GaussianMutation::uniform(scale, 1);
        let mut rng = StdRng::seed_from_u64(42);

        let n = 10_000;
        let mut samples = Vec::with_capacity(n);
        for _ in 0..n {
            let mut genome = RealVector::zeros(1);
            op.mutate(&mut genome, &mut rng);
            samples.push(genome[0]);
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;
        let std = var.sqrt();

        assert!(mean.abs() < 0.1, "expected mean near 0, got {mean}");
        assert!(
            (std - scale).abs() < 0.1,
            "expected std near {scale}, got {std}"
        );
    }

    #[test]
    #[should_panic(expected = "mutation scale must be a non-negative finite number")]
    fn test_negative_scale_panics() {
        GaussianMutation::new(vec![0.5, -0.1]);
    }

    #[test]
    #[should_panic(expected = "mutation scale must be a non-negative finite number")]
    fn test_nan_scale_panics() {
        GaussianMutation::uniform(f64::NAN, 2);
    }

    #[test]
    #[should_panic(expected = "genome arity does not match the operator's scales")]
    fn test_arity_mismatch_panics() {
        let op = GaussianMutation::uniform(1.0, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut genome = RealVector::zeros(2);
        op.mutate(&mut genome, &mut rng);
    }
}
