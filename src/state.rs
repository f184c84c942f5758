//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::DynShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
    /// Public prefix used to build `short_url` in responses.
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<DynShortenerService>, base_url: impl Into<String>) -> Self {
        Self {
            shortener,
            base_url: base_url.into(),
        }
    }
}
