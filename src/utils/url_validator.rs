//! Syntactic URL validation.
//!
//! Targets are stored verbatim; this module only decides whether the input is
//! a well-formed absolute URL. No normalization, scheme allow-listing or
//! reachability checks are performed.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` parses as an absolute URL.
///
/// Relative references (`example.com`, `/path`) and free text are rejected,
/// since they have no base to resolve against.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input and
/// [`UrlValidationError::InvalidFormat`] for anything `url` cannot parse.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    Url::parse(input)?;
    Ok(())
}
