//! Domain entities.

pub mod link;

pub use link::Link;
