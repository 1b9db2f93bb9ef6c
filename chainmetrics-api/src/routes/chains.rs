//! Chain overview, listing and detail endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chainmetrics_services::{Category, ChainDetailResponse, TopChainsParams};
use serde::Deserialize;
use tracing::{error, info};

use super::{bad_request, clamp_limit, service_error};
use crate::AppState;

/// Query parameters for the chain list
#[derive(Debug, Deserialize)]
pub struct ListChainsQuery {
    /// Maximum number of results (1-50, default 20)
    pub limit: Option<usize>,
    /// Minimum TVL in USD (default 0)
    pub min_tvl: Option<f64>,
    /// Category filter (all, l1, l2, alt-l1)
    pub category: Option<String>,
}

/// Create chain routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/chains", get(list_chains))
        .route("/chains/{name}", get(get_chain))
}

/// Ecosystem overview: total TVL and top chains
async fn get_overview(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics_service.overview().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to build overview: {}", e);
            service_error(e)
        }
    }
}

/// Filtered, ranked chain list
async fn list_chains(
    State(state): State<AppState>,
    Query(params): Query<ListChainsQuery>,
) -> impl IntoResponse {
    info!("Listing chains with params: {:?}", params);

    let category = match params.category.as_deref() {
        None | Some("") => Category::All,
        Some(s) => match Category::parse(s) {
            Some(c) => c,
            None => return bad_request(format!("Unknown category: {}", s)),
        },
    };

    let params = TopChainsParams {
        limit: clamp_limit(params.limit, 20, 50),
        min_tvl: params.min_tvl.unwrap_or(0.0).max(0.0),
        category,
    };

    match state.metrics_service.top_chains(params).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to list chains: {}", e);
            service_error(e)
        }
    }
}

/// Detail for a single chain by name
async fn get_chain(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    if name.trim().is_empty() {
        return bad_request("Chain name must not be empty");
    }

    match state.metrics_service.chain_detail(&name).await {
        Ok(ChainDetailResponse::Found(detail)) => {
            (StatusCode::OK, Json(detail)).into_response()
        }
        Ok(ChainDetailResponse::NotFound(payload)) => {
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(e) => {
            error!("Failed to fetch chain {}: {}", name, e);
            service_error(e)
        }
    }
}
