// src/options.rs
//! Simulation Options
//!
//! The resolved form of the toolbox options object: which stochastic
//! calculus the caller asked for, how the random source is seeded or
//! overridden, and which outputs the caller wants back. Analytic
//! solutions of additive-noise processes are identical under Ito and
//! Stratonovich, so the calculus field is accepted and ignored by the
//! generators in this crate; it exists so the same options travel to the
//! discretized solvers unchanged.

use crate::error::{SdeError, SdeResult};
use crate::rng::RandFn;
use bitflags::bitflags;

bitflags! {
    /// Which outputs the caller requests from a path generator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outputs: u32 {
        /// The `L`×`N` state trajectory. Always required.
        const PATH = 1 << 0;
        /// The `L`×`N` integrated, time-scaled Wiener increment matrix.
        const INCREMENTS = 1 << 1;
    }
}

/// Stochastic-calculus interpretation of the diffusion term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculus {
    Ito,
    Stratonovich,
}

/// Options for a path-generation call.
pub struct SdeOptions {
    /// Seed for the default random stream. Ignored when `rand_fn` is set.
    pub seed: Option<u64>,
    /// Custom draw function replacing the default random stream.
    pub rand_fn: Option<RandFn>,
    /// Calculus interpretation; irrelevant to analytic additive-noise
    /// solutions but carried for the discretized solvers.
    pub calculus: Calculus,
    /// Requested outputs.
    pub outputs: Outputs,
}

impl SdeOptions {
    /// Validate the options before any work is done.
    pub fn validate(&self) -> SdeResult<()> {
        if !self.outputs.contains(Outputs::PATH) {
            return Err(SdeError::InvalidConfiguration {
                field: "outputs".to_string(),
                reason: "the state trajectory (Outputs::PATH) must be requested".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SdeOptions {
    fn default() -> Self {
        SdeOptions {
            seed: None,
            rand_fn: None,
            calculus: Calculus::Ito,
            outputs: Outputs::PATH,
        }
    }
}
