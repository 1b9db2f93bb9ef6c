//! Bridge volume ranking endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chainmetrics_core::BridgePeriod;
use serde::Deserialize;
use tracing::error;

use super::{bad_request, clamp_limit, service_error};
use crate::AppState;

/// Query parameters for bridge rankings
#[derive(Debug, Deserialize)]
pub struct BridgesQuery {
    /// Maximum number of results (1-20, default 10)
    pub limit: Option<usize>,
    /// Volume period (24h, 7d, 30d; default 24h)
    pub period: Option<String>,
}

/// Create bridge routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/bridges", get(get_rankings))
}

/// Bridges ranked by volume over the chosen period
async fn get_rankings(
    State(state): State<AppState>,
    Query(params): Query<BridgesQuery>,
) -> impl IntoResponse {
    let period = match params.period.as_deref() {
        None | Some("") => BridgePeriod::default(),
        Some(s) => match BridgePeriod::parse(s) {
            Some(p) => p,
            None => return bad_request(format!("Unknown period: {}", s)),
        },
    };
    let limit = clamp_limit(params.limit, 10, 20);

    match state.metrics_service.bridge_rankings(limit, period).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to build bridge rankings: {}", e);
            service_error(e)
        }
    }
}
