// src/error.rs
use std::fmt;

/// Custom error types for the exact-sde library
#[derive(Debug, Clone)]
pub enum SdeError {
    /// A drift/diffusion coefficient is empty, non-finite, or has a length
    /// other than 1 or the state dimension
    InvalidParameterShape {
        parameter: String,
        len: usize,
        expected: usize,
    },

    /// A coefficient that must be non-negative has a negative entry
    NegativeParameter {
        parameter: String,
        index: usize,
        value: f64,
    },

    /// Time grid is too short, non-finite, or not strictly monotonic
    InvalidTimeGrid { reason: String },

    /// Input vector has the wrong length for the state dimension
    DimensionMismatch {
        field: String,
        len: usize,
        expected: usize,
    },

    /// Invalid configuration or options
    InvalidConfiguration { field: String, reason: String },

    /// Custom random source returned a matrix of the wrong shape
    RandomSourceShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    /// Custom random source failed or produced unusable draws
    RandomSourceFailure { reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameterShape {
                parameter,
                len,
                expected,
            } => {
                write!(
                    f,
                    "Invalid shape for parameter '{}': length {} (must be a finite vector of length 1 or {})",
                    parameter, len, expected
                )
            }
            SdeError::NegativeParameter {
                parameter,
                index,
                value,
            } => {
                write!(
                    f,
                    "Parameter '{}' must be non-negative: entry {} is {}",
                    parameter, index, value
                )
            }
            SdeError::InvalidTimeGrid { reason } => {
                write!(f, "Invalid time grid: {}", reason)
            }
            SdeError::DimensionMismatch {
                field,
                len,
                expected,
            } => {
                write!(
                    f,
                    "Dimension mismatch for '{}': length {} (expected {})",
                    field, len, expected
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::RandomSourceShapeMismatch {
                rows,
                cols,
                expected_rows,
                expected_cols,
            } => {
                write!(
                    f,
                    "Custom random source returned a {}x{} matrix (expected {}x{})",
                    rows, cols, expected_rows, expected_cols
                )
            }
            SdeError::RandomSourceFailure { reason } => {
                write!(f, "Custom random source failure: {}", reason)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for exact-sde operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a vector is non-empty, finite, and of length 1 or `n`
    pub fn validate_coefficient_shape(name: &str, values: &[f64], n: usize) -> SdeResult<()> {
        if values.is_empty() || (values.len() != 1 && values.len() != n) {
            return Err(SdeError::InvalidParameterShape {
                parameter: name.to_string(),
                len: values.len(),
                expected: n,
            });
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(SdeError::InvalidParameterShape {
                parameter: name.to_string(),
                len: values.len(),
                expected: n,
            });
        }
        Ok(())
    }

    /// Validate that every entry of a vector is non-negative
    pub fn validate_non_negative_entries(name: &str, values: &[f64]) -> SdeResult<()> {
        for (i, &v) in values.iter().enumerate() {
            if v < 0.0 {
                return Err(SdeError::NegativeParameter {
                    parameter: name.to_string(),
                    index: i,
                    value: v,
                });
            }
        }
        Ok(())
    }

    /// Validate that a scalar is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        validate_non_negative_entries(name, std::slice::from_ref(&value))
    }

    /// Validate that a scalar is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("value {} must be finite (not NaN or infinite)", value),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that every entry of a vector is finite
    pub fn validate_finite_entries(name: &str, values: &[f64]) -> SdeResult<()> {
        for &v in values {
            validate_finite(name, v)?;
        }
        Ok(())
    }
}
