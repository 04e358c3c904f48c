use thiserror::Error;

use crate::package::WorkoutCode;

/// Errors raised while turning sensor readings into workout statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Invalid workout: unknown activity code '{0}'")]
    UnknownCode(String),

    #[error("Invalid workout: {code} expects {expected} sensor values, got {actual}")]
    WrongValueCount {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid workout: {code} field '{field}' cannot hold {value}")]
    InvalidValue {
        code: WorkoutCode,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid workout: {code} field '{field}' expects a number, got {value}")]
    NonNumericValue {
        code: WorkoutCode,
        field: &'static str,
        value: String,
    },

    #[error("Division by zero: {field} must be greater than zero, got {value}")]
    NonPositiveDivisor { field: &'static str, value: f64 },
}

impl WorkoutError {
    /// True for every error describing a bad workout descriptor, whether the
    /// code is unknown or the payload does not fit the variant.
    pub fn is_invalid_workout(&self) -> bool {
        matches!(
            self,
            WorkoutError::UnknownCode(_)
                | WorkoutError::WrongValueCount { .. }
                | WorkoutError::InvalidValue { .. }
                | WorkoutError::NonNumericValue { .. }
        )
    }
}
