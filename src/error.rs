use crate::defaults::DefaultsError;
use crate::field::FieldError;
use thiserror::Error;

/// Top-level error type for the field-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("field configuration error: {0}")]
    Field(#[from] FieldError),

    #[error("field defaults error: {0}")]
    Defaults(#[from] DefaultsError),

    #[error("form context requires field defaults")]
    MissingDefaults,
}
