use thiserror::Error;

use crate::rotator::RotatorError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Rotator(#[from] RotatorError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
