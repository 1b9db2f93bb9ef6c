//! Chain Metrics Terminal API Server
//!
//! HTTP API server over the DefiLlama chain, stablecoin and bridge datasets.

mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use chainmetrics_defillama::LlamaClient;
use chainmetrics_services::{CategoryLists, MetricsService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub metrics_service: Arc<MetricsService<LlamaClient>>,
}

/// Load category list overrides from CATEGORY_LISTS_PATH, if set
fn load_category_lists() -> CategoryLists {
    let Ok(path) = std::env::var("CATEGORY_LISTS_PATH") else {
        return CategoryLists::default();
    };

    match std::fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|body| serde_json::from_str(&body).map_err(anyhow::Error::from))
    {
        Ok(lists) => {
            info!("Loaded category lists from {}", path);
            lists
        }
        Err(e) => {
            warn!("Failed to load category lists from {}: {}. Using defaults.", path, e);
            CategoryLists::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chainmetrics_api=debug")),
        )
        .init();

    info!("Starting Chain Metrics Terminal API");

    let llama_client = LlamaClient::new();
    let metrics_service =
        MetricsService::new(llama_client).with_category_lists(load_category_lists());

    let state = AppState {
        metrics_service: Arc::new(metrics_service),
    };

    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
