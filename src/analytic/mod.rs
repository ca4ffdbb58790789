// src/analytic/mod.rs
//! Closed-form (analytic) path generators.
//!
//! These produce trajectories with the exact distribution of the process
//! at the requested sample times, with no time-stepping error. They share
//! the argument normalizer and random-source model with the discretized
//! solvers but never take a discretization step.

pub mod ou;
