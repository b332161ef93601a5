use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerialError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SerialError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SerialError::SerializationError(_) => {
                "Could not serialize the result as JSON".to_string()
            }
            SerialError::InvalidConfigValueError { field, value, .. } => {
                format!("The value '{}' is not acceptable for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SerialError::SerializationError(_) => {
                "Rerun without --json or report this as a bug".to_string()
            }
            SerialError::InvalidConfigValueError { field, reason, .. } => {
                format!("Adjust {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SerialError>;
