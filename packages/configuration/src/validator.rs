//! Trait to validate semantic errors.
//!
//! A configuration can be well-formed but still unusable, for example when
//! the upstream address is present but empty.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug)]
pub enum SemanticValidationError {
    #[error("The upstream tracker address is empty. Please set the `OPENTRACKER_URL` environment variable.")]
    EmptyUpstreamAddress,

    #[error("The upstream tracker address `{address}` is not a valid `host:port`: {source}")]
    InvalidUpstreamAddress { address: String, source: url::ParseError },
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
