//! # exact-sde: Exact-Distribution Sample Paths for Solvable SDEs
//!
//! A Rust library for generating sample paths of stochastic processes
//! that admit closed-form solutions, so that exact-distribution
//! trajectories can be produced at arbitrary sample times without
//! time-stepping error.
//!
//! ## Key Features
//!
//! - **Exact distributions**: time-rescaled Wiener construction, no
//!   discretization bias at any grid spacing
//! - **Diagonal multi-dimensional noise**: drift rate, drift mean, and
//!   diffusion each scalar or per-dimension, handled by one broadcasting
//!   code path
//! - **Pluggable randomness**: seeded default stream or a user-supplied
//!   draw function, validated defensively at the boundary
//! - **Production Ready**: comprehensive error handling and validation
//!
//! ## Quick Start
//!
//! ```rust
//! use exact_sde::{ou_path, SdeOptions};
//!
//! // Mean-reverting OU process on a uniform grid over [0, 1]
//! let times: Vec<f64> = (0..=100).map(|i| i as f64 * 0.01).collect();
//! let sol = ou_path(
//!     4.0,  // drift rate θ
//!     0.0,  // drift mean μ
//!     0.25, // diffusion scale σ
//!     &times,
//!     &[-1.0, 1.0], // two independent dimensions
//!     SdeOptions {
//!         seed: Some(42),
//!         ..Default::default()
//!     },
//! )
//! .expect("valid inputs");
//!
//! assert_eq!(sol.y.dim(), (101, 2));
//! ```
//!
//! ## Mathematical Foundation
//!
//! The Ornstein-Uhlenbeck process `dY = θ(μ − Y)dt + σ dW` has the exact
//! solution `Y_t = y0·e^{−θt} + μ(1 − e^{−θt}) + σ·e^{−θt}·B(τ(t))` where
//! `B` is a Wiener process on the rescaled clock `τ(t) = (e^{2θt} − 1)/(2θ)`.
//! Sampling `B` on the rescaled grid gives the exact joint distribution of
//! the trajectory; the diffusion is additive, so the Ito and Stratonovich
//! interpretations coincide.

// Module declarations
pub mod analytic;
pub mod args;
pub mod error;
pub mod math_utils;
pub mod options;
pub mod params;
pub mod rng;

// Re-export commonly used types for convenience
pub use analytic::ou::{ou_path, OuProcess, OuSolution};
pub use error::{SdeError, SdeResult};
pub use options::{Calculus, Outputs, SdeOptions};
pub use params::Coeff;
pub use rng::{RandFn, RandomSource};
