//! Short code creation and resolution service.

use std::sync::Arc;

use crate::domain::repositories::{LinkStore, StoreError};
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Errors returned by [`ShortenerService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The submitted URL is not a well-formed absolute URL.
    #[error("invalid URL: {0}")]
    InvalidInput(String),

    /// Every candidate code was already taken.
    #[error("no free short code found after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// No link is stored under the code.
    #[error("short code not found: {0}")]
    NotFound(String),

    /// The store could not complete the operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Shortener service over an arbitrary store and code generator.
///
/// Holds no link data itself; every lookup goes to the store.
pub struct ShortenerService<S: LinkStore + ?Sized, G: CodeGenerator + ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: usize,
}

/// Service with the store and generator chosen at runtime.
pub type DynShortenerService = ShortenerService<dyn LinkStore, dyn CodeGenerator>;

impl<S: LinkStore + ?Sized, G: CodeGenerator + ?Sized> ShortenerService<S, G> {
    /// Creates a new service with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many candidate codes are tried per `shorten` call (at least one).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the configured retry bound.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Creates a short code for `url`.
    ///
    /// The URL is stored verbatim. A candidate code is drawn from the
    /// generator and written with [`LinkStore::put`]; if the store reports the
    /// code as taken, a fresh candidate is drawn, up to the configured bound.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidInput`] if `url` does not parse; the store is
    ///   not touched
    /// - [`ShortenError::Exhausted`] if every candidate collided
    /// - [`ShortenError::StoreUnavailable`] on backend failure (not retried)
    pub async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        validate_url(url).map_err(|e| ShortenError::InvalidInput(e.to_string()))?;

        for _ in 0..self.max_attempts {
            let code = self.generator.generate();

            match self.store.put(&code, url).await {
                Ok(()) => return Ok(code),
                Err(StoreError::AlreadyExists(_)) => continue,
                Err(StoreError::Unavailable(reason)) => {
                    return Err(ShortenError::StoreUnavailable(reason));
                }
            }
        }

        Err(ShortenError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the URL stored under `code`.
    ///
    /// Lookup is exact and case-sensitive. Codes the configured generator
    /// could never have produced are reported as not found without a store
    /// round trip.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::NotFound`] if nothing is stored under `code`
    /// - [`ShortenError::StoreUnavailable`] on backend failure
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenError> {
        if !self.generator.is_well_formed(code) {
            return Err(ShortenError::NotFound(code.to_owned()));
        }

        match self.store.get(code).await {
            Ok(Some(link)) => Ok(link.target),
            Ok(None) => Err(ShortenError::NotFound(code.to_owned())),
            Err(e) => Err(ShortenError::StoreUnavailable(e.to_string())),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
