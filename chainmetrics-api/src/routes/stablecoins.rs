//! Stablecoin distribution endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use super::{clamp_limit, service_error};
use crate::AppState;

/// Query parameters for the stablecoin distribution
#[derive(Debug, Deserialize)]
pub struct StablecoinsQuery {
    /// Maximum number of results (1-50, default 20)
    pub limit: Option<usize>,
}

/// Create stablecoin routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/stablecoins", get(get_distribution))
}

/// Stablecoin supply distribution across chains
async fn get_distribution(
    State(state): State<AppState>,
    Query(params): Query<StablecoinsQuery>,
) -> impl IntoResponse {
    let limit = clamp_limit(params.limit, 20, 50);

    match state.metrics_service.stablecoin_distribution(limit).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to build stablecoin distribution: {}", e);
            service_error(e)
        }
    }
}
