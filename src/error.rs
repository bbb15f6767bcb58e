//! Unified error hierarchy for fittrack
//!
//! Every failure the calculator can report is a variant of [`TrackerError`],
//! so callers can tell an unknown workout code apart from malformed sensor data.

use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Workout code does not match any known training type
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Sensor package carries the wrong number of values for the workout
    #[error("Invalid sensor data for {workout}: expected {expected} values, got {actual}")]
    ArityMismatch {
        workout: String,
        expected: usize,
        actual: usize,
    },

    /// Duration is zero, negative or not a finite number
    #[error("Invalid duration: {duration} h (must be a positive number of hours)")]
    InvalidDuration { duration: f64 },

    /// Any other sensor value outside its valid range
    #[error("Invalid parameter for {workout}: {parameter}={value}")]
    InvalidParameter {
        workout: String,
        parameter: String,
        value: String,
    },

    /// JSON rendering errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Shorthand for [`TrackerError::InvalidParameter`]
    pub fn invalid_parameter(workout: &str, parameter: &str, value: impl ToString) -> Self {
        TrackerError::InvalidParameter {
            workout: workout.to_string(),
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::UnknownWorkoutType { .. } => ErrorSeverity::Warning,
            TrackerError::ArityMismatch { .. } => ErrorSeverity::Error,
            TrackerError::InvalidDuration { .. } => ErrorSeverity::Error,
            TrackerError::InvalidParameter { .. } => ErrorSeverity::Error,
            TrackerError::Serialization(_) => ErrorSeverity::Critical,
            TrackerError::Io(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::UnknownWorkoutType { code } => {
                format!(
                    "Workout code '{}' is not supported. Use one of: SWM, RUN, WLK.",
                    code
                )
            }
            TrackerError::ArityMismatch {
                workout,
                expected,
                actual,
            } => {
                format!(
                    "A {} package needs {} sensor values but {} were received.",
                    workout, expected, actual
                )
            }
            TrackerError::InvalidDuration { .. } => {
                "Workout duration must be greater than zero hours.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Failure outside the calculation itself (output, serialization)
    Critical,
    /// Malformed input that aborts the batch
    Error,
    /// Input the calculator does not recognise
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = TrackerError::UnknownWorkoutType {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err = TrackerError::InvalidDuration { duration: 0.0 };
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_error_display_carries_code() {
        let err = TrackerError::UnknownWorkoutType {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown workout type: XYZ");
    }

    #[test]
    fn test_user_messages() {
        let err = TrackerError::ArityMismatch {
            workout: "Running".to_string(),
            expected: 3,
            actual: 2,
        };
        assert!(err.user_message().contains("needs 3 sensor values"));

        let err = TrackerError::invalid_parameter("SportsWalking", "height", 0.0);
        assert_eq!(
            err.user_message(),
            "Invalid parameter for SportsWalking: height=0"
        );
    }
}
