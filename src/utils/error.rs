use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("At least {required} participants are required, but only {available} were added")]
    InsufficientParticipants { required: usize, available: usize },

    #[error("Winner count must be at least 1")]
    InvalidWinnerCount,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Session error: {message}")]
    SessionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Configuration,
    Storage,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RaffleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RaffleError::InsufficientParticipants { .. } | RaffleError::InvalidWinnerCount => {
                ErrorCategory::Selection
            }
            RaffleError::ConfigError { .. }
            | RaffleError::ConfigValidationError { .. }
            | RaffleError::InvalidConfigValueError { .. }
            | RaffleError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RaffleError::IoError(_)
            | RaffleError::SerializationError(_)
            | RaffleError::StorageError { .. } => ErrorCategory::Storage,
            RaffleError::SessionError { .. } => ErrorCategory::Session,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Not enough names is a notice, the user just adds more.
            ErrorCategory::Selection => match self {
                RaffleError::InsufficientParticipants { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Session => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RaffleError::InsufficientParticipants { required, .. } => {
                format!("Need at least {} participants to draw winners", required)
            }
            RaffleError::InvalidWinnerCount => {
                "The number of winners must be at least 1".to_string()
            }
            RaffleError::IoError(e) => format!("Could not access a file: {}", e),
            RaffleError::SerializationError(e) => format!("Stored data is not valid JSON: {}", e),
            RaffleError::ConfigError { message } => format!("Configuration problem: {}", message),
            RaffleError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            RaffleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            RaffleError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            RaffleError::StorageError { key, message } => {
                format!("Could not use stored data '{}': {}", key, message)
            }
            RaffleError::SessionError { message } => {
                format!("The raffle session stopped: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RaffleError::InsufficientParticipants { .. } => {
                "Add more participants and run the draw again"
            }
            RaffleError::InvalidWinnerCount => "Set winner_count (or --winners) to 1 or more",
            RaffleError::IoError(_) => "Check that the storage path exists and is writable",
            RaffleError::SerializationError(_) => {
                "Fix or remove the stored history file, then try again"
            }
            RaffleError::ConfigError { .. }
            | RaffleError::ConfigValidationError { .. }
            | RaffleError::InvalidConfigValueError { .. }
            | RaffleError::MissingConfigError { .. } => {
                "Review the configuration file and command line options"
            }
            RaffleError::StorageError { .. } => "Use a storage key without path separators",
            RaffleError::SessionError { .. } => "Restart the raffle session",
        }
    }
}

pub type Result<T> = std::result::Result<T, RaffleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_participants_is_a_notice() {
        let err = RaffleError::InsufficientParticipants {
            required: 5,
            available: 4,
        };
        assert_eq!(err.category(), ErrorCategory::Selection);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "Need at least 5 participants to draw winners"
        );
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = RaffleError::MissingConfigError {
            field: "storage.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let err: RaffleError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
