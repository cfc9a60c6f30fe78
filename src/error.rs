// src/error.rs
use std::fmt;

/// Error type for the trig-sde library
///
/// Only parameter problems are errors. Non-finite values produced during a
/// run (overflow, NaN inputs) are carried through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// A simulation or estimator input violates its constraint
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for trig-sde operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is strictly positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value.is_nan() || value <= 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        if value.is_nan() || value < 0.0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of sample paths (M)
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        validate_count("paths", paths)
    }

    /// Validate the number of time steps (N)
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        validate_count("steps", steps)
    }

    fn validate_count(name: &str, count: usize) -> SdeResult<()> {
        if count == 0 {
            Err(SdeError::InvalidParameter {
                parameter: name.to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
