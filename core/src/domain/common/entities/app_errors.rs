use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
