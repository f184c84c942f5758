//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "code": "aZ3kP0qx", "short_url": "http://localhost:3000/aZ3kP0qx" }
/// ```
///
/// # Errors
///
/// - 422 Unprocessable Entity if the body is not valid JSON of the expected shape
/// - 400 Bad Request if the URL does not parse
/// - 500 Internal Server Error if no free code was found or the store failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload?;

    let code = state.shortener.shorten(&request.url).await?;
    let short_url = state.shortener.short_url(&state.base_url, &code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { code, short_url })))
}
