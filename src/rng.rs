// src/rng.rs
//! Random Sources for Exact-Distribution Path Generation
//!
//! # Design Philosophy
//!
//! The generators in this crate never touch ambient global state. The
//! active source of standard-normal draws is an explicitly passed
//! capability, so that:
//!
//! 1. **Reproducibility**: same seed → same trajectories (critical for
//!    debugging/validation)
//! 2. **Parallel safety**: concurrent callers supply independently seeded
//!    streams instead of sharing a process-wide one
//! 3. **Testability**: tests substitute deterministic draw functions
//!    without mutating shared state
//!
//! # Trust Boundary
//!
//! The default seeded source is trusted and its output is used as-is. A
//! user-supplied draw function is late-bound code, so its output is
//! validated at the boundary every time it is invoked: exact shape,
//! non-empty, all entries finite. Violations surface as
//! [`SdeError::RandomSourceShapeMismatch`] or
//! [`SdeError::RandomSourceFailure`], never as silently propagated
//! malformed data.

use crate::error::{SdeError, SdeResult};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// User-supplied draw function: `(rows, cols)` → matrix of standard-normal
/// variates. Fallible so a source can report its own inability to produce
/// draws instead of returning garbage.
pub type RandFn = Box<dyn FnMut(usize, usize) -> SdeResult<Array2<f64>>>;

/// The active source of standard-normal draw matrices.
pub enum RandomSource {
    /// Default generator, seeded explicitly or from OS entropy.
    Seeded(StdRng),
    /// User-supplied draw function, validated on every invocation.
    Custom(RandFn),
}

// The custom draw function is opaque, so Debug prints a placeholder.
impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSource::Seeded(rng) => f.debug_tuple("Seeded").field(rng).finish(),
            RandomSource::Custom(_) => f.debug_tuple("Custom").field(&"..").finish(),
        }
    }
}

impl RandomSource {
    /// Resolve the active source from the options fields: a custom draw
    /// function wins over a seed, a seed wins over entropy.
    pub fn resolve(rand_fn: Option<RandFn>, seed: Option<u64>) -> Self {
        match rand_fn {
            Some(f) => RandomSource::Custom(f),
            None => match seed {
                Some(s) => RandomSource::Seeded(seed_rng_from_u64(s)),
                None => RandomSource::Seeded(StdRng::from_entropy()),
            },
        }
    }

    /// Whether this source is late-bound user code (and therefore has its
    /// output validated on every draw).
    pub fn is_custom(&self) -> bool {
        matches!(self, RandomSource::Custom(_))
    }

    /// Draw a `rows`×`cols` matrix of standard-normal variates.
    ///
    /// The default path fills the matrix directly with no output checks.
    /// The custom path invokes the user function exactly once with
    /// `(rows, cols)` and validates shape, emptiness, and finiteness.
    pub fn draw_matrix(&mut self, rows: usize, cols: usize) -> SdeResult<Array2<f64>> {
        match self {
            RandomSource::Seeded(rng) => {
                Ok(Array2::from_shape_fn((rows, cols), |_| get_normal_draw(rng)))
            }
            RandomSource::Custom(f) => {
                let z = f(rows, cols).map_err(|e| SdeError::RandomSourceFailure {
                    reason: e.to_string(),
                })?;
                if z.is_empty() || z.nrows() != rows || z.ncols() != cols {
                    return Err(SdeError::RandomSourceShapeMismatch {
                        rows: z.nrows(),
                        cols: z.ncols(),
                        expected_rows: rows,
                        expected_cols: cols,
                    });
                }
                if !z.iter().all(|v| v.is_finite()) {
                    return Err(SdeError::RandomSourceFailure {
                        reason: "draw matrix contains non-finite values".to_string(),
                    });
                }
                Ok(z)
            }
        }
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
