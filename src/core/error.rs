// Validation errors for usage queries

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UsageError>;

/// Client input errors. Display renders the plain-text diagnostic sent back
/// with a 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid duration: {value}")]
    InvalidWindow { value: String },

    #[error("Duplicate device: {name}")]
    DuplicateDevice { name: String },

    #[error("Unknown device: {name}")]
    UnknownDevice { name: String },
}
