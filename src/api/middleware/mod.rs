//! HTTP middleware for request processing.
//!
//! Provides observability (tracing, request ids) and panic recovery.

pub mod recover;
pub mod request_id;
pub mod tracing;
