use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotatorError {
    #[error("Fact rotator configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Fact rotator must be started from within a tokio runtime")]
    NoRuntime,
}
