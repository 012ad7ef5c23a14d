use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

impl ClinicError {
    /// The message shown inline to the user, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            ClinicError::Network(msg)
            | ClinicError::Validation(msg)
            | ClinicError::Conflict(msg)
            | ClinicError::NotFound(msg) => msg.clone(),
            ClinicError::Internal(report) => report.to_string(),
        }
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
