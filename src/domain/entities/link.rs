//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from short code to destination URL.
///
/// Created once when a URL is shortened and never modified afterwards.
/// `target` holds the URL exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target,
            created_at,
        }
    }
}
