// src/params.rs
//! Scalar-or-Per-Dimension Coefficients
//!
//! The drift rate, drift mean, and diffusion scale of a diagonal-noise
//! process are each either one scalar applied to every state dimension or
//! a dense vector with one entry per dimension. `Coeff` carries that
//! distinction, and `to_row` lowers it to a `(1,1)` or `(1,N)` row so all
//! shape combinations flow through a single co-broadcasting code path.
//! Scalar coefficients stay `(1,1)` and are never expanded to full
//! `(L,N)` storage.

use crate::error::{validation, SdeResult};
use ndarray::{Array1, Array2};

/// A process coefficient: one value for all dimensions, or one per dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum Coeff {
    Scalar(f64),
    PerDim(Array1<f64>),
}

impl Coeff {
    pub fn len(&self) -> usize {
        match self {
            Coeff::Scalar(_) => 1,
            Coeff::PerDim(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry for dimension `j`, broadcasting a scalar to every dimension.
    pub fn get(&self, j: usize) -> f64 {
        match self {
            Coeff::Scalar(v) => *v,
            Coeff::PerDim(v) => v[j],
        }
    }

    /// Whether every entry is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Coeff::Scalar(v) => *v == 0.0,
            Coeff::PerDim(v) => v.iter().all(|&x| x == 0.0),
        }
    }

    fn as_slice(&self) -> &[f64] {
        match self {
            Coeff::Scalar(v) => std::slice::from_ref(v),
            Coeff::PerDim(v) => v.as_slice().expect("contiguous 1-D array"),
        }
    }

    /// Check the shape contract: non-empty, finite, length 1 or `n`.
    pub fn validate_shape(&self, name: &str, n: usize) -> SdeResult<()> {
        validation::validate_coefficient_shape(name, self.as_slice(), n)
    }

    /// Check the sign contract: every entry non-negative.
    pub fn validate_non_negative(&self, name: &str) -> SdeResult<()> {
        validation::validate_non_negative_entries(name, self.as_slice())
    }

    /// Lower to a `(1,1)` or `(1,len)` row for broadcasting arithmetic.
    pub fn to_row(&self) -> Array2<f64> {
        match self {
            Coeff::Scalar(v) => Array2::from_elem((1, 1), *v),
            Coeff::PerDim(v) => {
                Array2::from_shape_fn((1, v.len()), |(_, j)| v[j])
            }
        }
    }
}

impl From<f64> for Coeff {
    fn from(v: f64) -> Self {
        Coeff::Scalar(v)
    }
}

impl From<Vec<f64>> for Coeff {
    fn from(v: Vec<f64>) -> Self {
        Coeff::PerDim(Array1::from(v))
    }
}

impl From<&[f64]> for Coeff {
    fn from(v: &[f64]) -> Self {
        Coeff::PerDim(Array1::from(v.to_vec()))
    }
}

impl From<Array1<f64>> for Coeff {
    fn from(v: Array1<f64>) -> Self {
        Coeff::PerDim(v)
    }
}
