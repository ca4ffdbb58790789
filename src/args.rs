// src/args.rs
//! Argument Normalizer
//!
//! Shared front end for the path generators: validates the time grid and
//! the initial condition, derives the quantities every generator needs
//! (dimension count, sample count, time direction, step sizes), and
//! resolves the active random source from the options.
//!
//! The step-size fields and the Stratonovich flag are computed here for
//! the discretized solvers; analytic generators accept them and ignore
//! them, since a closed-form solution has no discretization step and
//! additive-noise analytic solutions coincide under both calculi.

use crate::error::{validation, SdeError, SdeResult};
use crate::options::{Calculus, SdeOptions};
use crate::rng::RandomSource;
use ndarray::Array1;

/// Normalized, validated simulation arguments.
#[derive(Debug)]
pub struct SdeArgs {
    /// State dimension count, from the initial condition.
    pub n: usize,
    /// Number of sample times.
    pub l: usize,
    /// Time direction: `+1.0` for ascending grids, `-1.0` for descending.
    pub tdir: f64,
    /// The sample times, validated finite and strictly monotonic.
    pub times: Array1<f64>,
    /// Initial condition, validated finite.
    pub y0: Array1<f64>,
    /// Successive time differences (`l - 1` entries).
    pub dt: Array1<f64>,
    /// Whether all steps are the same size.
    pub const_step: bool,
    /// Whether the caller asked for the Stratonovich interpretation.
    pub stratonovich: bool,
    /// The resolved random source.
    pub source: RandomSource,
    /// Whether the source is late-bound user code.
    pub is_custom: bool,
}

impl SdeArgs {
    /// Validate and normalize `(times, y0, options)` into `SdeArgs`.
    ///
    /// Consumes the options because the custom draw function, if any,
    /// moves into the resolved random source.
    pub fn normalize(times: &[f64], y0: &[f64], options: SdeOptions) -> SdeResult<Self> {
        options.validate()?;

        if times.len() < 2 {
            return Err(SdeError::InvalidTimeGrid {
                reason: format!("need at least 2 sample times, got {}", times.len()),
            });
        }
        if !times.iter().all(|t| t.is_finite()) {
            return Err(SdeError::InvalidTimeGrid {
                reason: "sample times must be finite".to_string(),
            });
        }

        let l = times.len();
        let mut dt = Array1::zeros(l - 1);
        for i in 0..l - 1 {
            dt[i] = times[i + 1] - times[i];
        }

        let tdir = if dt[0] > 0.0 { 1.0 } else { -1.0 };
        for (i, &d) in dt.iter().enumerate() {
            if d == 0.0 {
                return Err(SdeError::InvalidTimeGrid {
                    reason: format!("repeated sample time at index {}", i + 1),
                });
            }
            if d.signum() != tdir {
                return Err(SdeError::InvalidTimeGrid {
                    reason: "sample times must be strictly monotonic in one direction"
                        .to_string(),
                });
            }
        }

        let d0 = dt[0];
        let const_step = dt
            .iter()
            .all(|&d| (d - d0).abs() <= f64::EPSILON * d0.abs().max(1.0));

        if y0.is_empty() {
            return Err(SdeError::DimensionMismatch {
                field: "y0".to_string(),
                len: 0,
                expected: 1,
            });
        }
        validation::validate_finite_entries("y0", y0)?;

        let source = RandomSource::resolve(options.rand_fn, options.seed);
        let is_custom = source.is_custom();

        Ok(SdeArgs {
            n: y0.len(),
            l,
            tdir,
            times: Array1::from(times.to_vec()),
            y0: Array1::from(y0.to_vec()),
            dt,
            const_step,
            stratonovich: options.calculus == Calculus::Stratonovich,
            source,
            is_custom,
        })
    }
}
