//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected draw parameters and configuration, failed or missing export/share
//! collaborators, missing user input in auxiliary flows, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid draw parameters: count {count} must be within 1..={domain_max}")]
    InvalidDrawParameters { domain_max: u32, count: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("export failed: {0}")]
    ExportFailure(String),

    #[error("collaborator '{0}' is not available")]
    MissingCollaborator(String),

    #[error("collaborator error: {0}")]
    Collaborator(String),

    #[error("missing required input '{field}'")]
    MissingRequiredInput { field: &'static str },

    #[error("no finished draw is available")]
    NoFinishedDraw,

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
