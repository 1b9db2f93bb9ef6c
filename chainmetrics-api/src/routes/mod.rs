//! API route definitions

mod bridges;
mod chains;
mod compare;
mod health;
mod stablecoins;

use crate::AppState;
use axum::{http::StatusCode, response::IntoResponse, Json};
use chainmetrics_core::MetricsError;
use serde::Serialize;

/// Create all API routes
pub fn api_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(chains::routes())
        .merge(stablecoins::routes())
        .merge(bridges::routes())
        .merge(compare::routes())
        .merge(health::routes())
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a service error onto an HTTP response. A failed upstream fetch is
/// the caller's 502; anything else is a 500.
pub fn service_error(e: MetricsError) -> axum::response::Response {
    let status = if e.is_provider_unavailable() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// 400 with a message
pub fn bad_request(msg: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: msg.into() }),
    )
        .into_response()
}

/// Clamp an optional limit parameter into `[1, max]`, defaulting when absent
pub fn clamp_limit(limit: Option<usize>, default: usize, max: usize) -> usize {
    limit.unwrap_or(default).clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, 20, 50), 20);
        assert_eq!(clamp_limit(Some(5), 20, 50), 5);
        assert_eq!(clamp_limit(Some(0), 20, 50), 1);
        assert_eq!(clamp_limit(Some(999), 20, 50), 50);
    }
}
