//! Chain comparison endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::{bad_request, service_error};
use crate::AppState;

/// Minimum and maximum number of chains in one comparison
const MIN_CHAINS: usize = 2;
const MAX_CHAINS: usize = 5;

/// Query parameters for a comparison
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated chain names (2-5)
    pub chains: Option<String>,
}

/// Create comparison routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/compare", get(compare_chains))
}

/// Side-by-side comparison of chains across TVL, stablecoins and bridges
async fn compare_chains(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> impl IntoResponse {
    let Some(raw) = params.chains else {
        return bad_request("Missing 'chains' parameter (comma-separated names)");
    };

    let names: Vec<String> = raw
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    if names.len() < MIN_CHAINS || names.len() > MAX_CHAINS {
        return bad_request(format!(
            "Expected between {} and {} chain names, got {}",
            MIN_CHAINS,
            MAX_CHAINS,
            names.len()
        ));
    }

    info!("Comparing chains: {:?}", names);

    match state.metrics_service.compare_chains(&names).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to compare chains: {}", e);
            service_error(e)
        }
    }
}
