//! Application layer services implementing business logic.
//!
//! Services consume the store and generator traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! - [`services::shortener_service::ShortenerService`] - Short code creation and resolution

pub mod services;
