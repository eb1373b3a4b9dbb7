use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Activity not found: {name}")]
    ActivityNotFound { name: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: String, capacity: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SignupError {
    /// Errors caused by the request itself rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SignupError::ActivityNotFound { .. }
                | SignupError::AlreadyRegistered { .. }
                | SignupError::NotRegistered { .. }
                | SignupError::ActivityFull { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;
