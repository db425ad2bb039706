use thiserror::Error;

use crate::domain::{UnknownCurrencyError, ValidationError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid expense: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrencyError),
}
