//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into shortener operations and shortener errors
//! into status codes.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, request ids and panic recovery
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
