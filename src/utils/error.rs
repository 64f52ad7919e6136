use thiserror::Error;

#[derive(Error, Debug)]
pub enum KennelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl KennelError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            KennelError::IoError(e) => format!("Could not read the roster file: {}", e),
            KennelError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            KennelError::ConfigValidationError { field, message } => {
                format!("The roster is not valid ({}): {}", field, message)
            }
            KennelError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value of '{}' is not accepted: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KennelError>;
