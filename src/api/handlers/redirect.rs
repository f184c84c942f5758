//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Mappings never change once created, so the redirect is permanent (308).
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the store cannot be read.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.shortener.resolve(&code).await?;
    debug!(%code, %target, "Redirecting");

    Ok((
        StatusCode::PERMANENT_REDIRECT,
        [(header::LOCATION, location(&target)?)],
    ))
}

/// `Location` value for a stored target.
///
/// Targets are stored verbatim, so one may hold non-ASCII text that is not a
/// legal header value; those are sent in their percent-encoded form.
fn location(target: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(target) {
        return Ok(value);
    }

    Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "target": target }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_ascii_verbatim() {
        let value = location("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_non_ascii_is_percent_encoded() {
        let value = location("https://example.com/über").unwrap();
        assert_eq!(value, "https://example.com/%C3%BCber");
    }
}
