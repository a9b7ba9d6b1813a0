//! Validated input records accepted by the catalog tools.

use thiserror::Error;
use validator::ValidationErrors;

pub mod phones;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted records.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,
}
