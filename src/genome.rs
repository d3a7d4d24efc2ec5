//! Real-valued genome representation.
//!
//! [`RealVector`] is the stock genome for continuous search spaces: a
//! fixed-arity vector of `f64` genes. The [`RealGenome`] trait exposes the
//! gene slice so operators like
//! [`GaussianMutation`](crate::operators::GaussianMutation) can work with any
//! real-valued representation, not just [`RealVector`].

use std::ops::{Index, IndexMut};

use crate::types::Genome;

/// A genome whose genes form a slice of `f64`.
///
/// Implement this for custom structs that embed a real-valued chromosome
/// alongside other data; the built-in mutation operators then apply to them
/// directly.
pub trait RealGenome: Genome {
    /// Read access to the genes.
    fn genes(&self) -> &[f64];

    /// Write access to the genes. The arity must not change.
    fn genes_mut(&mut self) -> &mut [f64];

    /// Number of genes. Fixed for the lifetime of the genome.
    fn arity(&self) -> usize {
        self.genes().len()
    }
}

/// Fixed-arity real-valued vector genome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealVector {
    genes: Vec<f64>,
}

impl RealVector {
    /// Creates a vector with the given genes.
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Creates a zero-filled vector of the given arity.
    pub fn zeros(arity: usize) -> Self {
        Self {
            genes: vec![0.0; arity],
        }
    }

    /// Creates a vector with every gene set to `value`.
    pub fn filled(arity: usize, value: f64) -> Self {
        Self {
            genes: vec![value; arity],
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the vector has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Consumes the vector and returns the underlying genes.
    pub fn into_inner(self) -> Vec<f64> {
        self.genes
    }
}

impl RealGenome for RealVector {
    fn genes(&self) -> &[f64] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }
}

impl RealGenome for Vec<f64> {
    fn genes(&self) -> &[f64] {
        self
    }

    fn genes_mut(&mut self) -> &mut [f64] {
        self
    }
}

impl Index<usize> for RealVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}

impl IndexMut<usize> for RealVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.genes[index]
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(genes: Vec<f64>) -> Self {
        Self::new(genes)
    }
}

impl From<&[f64]> for RealVector {
    fn from(genes: &[f64]) -> Self {
        Self::new(genes.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RealVector {
    fn from(genes: [f64; N]) -> Self {
        Self::new(genes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_has_requested_arity() {
        let v = RealVector::zeros(5);
        assert_eq!(v.len(), 5);
        assert!(v.genes().iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_filled_repeats_value() {
        let v = RealVector::filled(3, 1.25);
        assert_eq!(v.into_inner(), vec![1.25, 1.25, 1.25]);
    }

    #[test]
    fn test_indexing_reads_and_writes() {
        let mut v = RealVector::from([1.0, 2.0, 3.0]);
        v[1] = 9.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 9.0);
    }

    #[test]
    fn test_genes_mut_preserves_arity() {
        let mut v = RealVector::zeros(4);
        for g in v.genes_mut() {
            *g += 0.5;
        }
        assert_eq!(v.arity(), 4);
        assert_eq!(v, RealVector::filled(4, 0.5));
    }

    #[test]
    fn test_plain_vec_is_a_real_genome() {
        let mut v: Vec<f64> = vec![1.0, -1.0];
        v.genes_mut()[0] = 0.0;
        assert_eq!(v.genes(), &[0.0, -1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let v = RealVector::from([0.5, -2.0]);
        let json = serde_json::to_string(&v).unwrap();
        let back: RealVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
