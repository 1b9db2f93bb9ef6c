//! DefiLlama API client
//!
//! Provides methods for fetching the three public DefiLlama datasets.

use crate::types::{BridgesResponse, LlamaChain, LlamaStablecoinChain};
use chainmetrics_core::{Bridge, ChainTvl, MetricsError, StablecoinChain};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL for the main DefiLlama API
const LLAMA_API_BASE: &str = "https://api.llama.fi";
/// Base URL for the stablecoins API
const STABLECOINS_API_BASE: &str = "https://stablecoins.llama.fi";
/// Base URL for the bridges API
const BRIDGES_API_BASE: &str = "https://bridges.llama.fi";

/// DefiLlama API client
#[derive(Clone)]
pub struct LlamaClient {
    client: Client,
    api_base: String,
    stablecoins_base: String,
    bridges_base: String,
}

impl LlamaClient {
    /// Create a new client against the public endpoints
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: LLAMA_API_BASE.to_string(),
            stablecoins_base: STABLECOINS_API_BASE.to_string(),
            bridges_base: BRIDGES_API_BASE.to_string(),
        }
    }

    /// Create a client with custom base URLs (for tests against a local server)
    pub fn with_base_urls(
        api_base: impl Into<String>,
        stablecoins_base: impl Into<String>,
        bridges_base: impl Into<String>,
    ) -> Self {
        let mut client = Self::new();
        client.api_base = api_base.into();
        client.stablecoins_base = stablecoins_base.into();
        client.bridges_base = bridges_base.into();
        client
    }

    /// Fetch TVL for every chain
    #[instrument(skip(self))]
    pub async fn get_chains(&self) -> Result<Vec<ChainTvl>, MetricsError> {
        let url = format!("{}/v2/chains", self.api_base);
        let chains: Vec<LlamaChain> = self.get_json(&url, "chains").await?;
        debug!("Fetched {} chains", chains.len());
        Ok(chains.into_iter().map(|c| c.to_chain_tvl()).collect())
    }

    /// Fetch per-chain stablecoin circulating supply
    #[instrument(skip(self))]
    pub async fn get_stablecoin_chains(&self) -> Result<Vec<StablecoinChain>, MetricsError> {
        let url = format!("{}/stablecoinchains", self.stablecoins_base);
        let chains: Vec<LlamaStablecoinChain> = self.get_json(&url, "stablecoin chains").await?;
        debug!("Fetched {} stablecoin chains", chains.len());
        Ok(chains
            .into_iter()
            .map(|c| c.to_stablecoin_chain())
            .collect())
    }

    /// Fetch all bridges with their supported chains
    #[instrument(skip(self))]
    pub async fn get_bridges(&self) -> Result<Vec<Bridge>, MetricsError> {
        let url = format!("{}/bridges?includeChains=true", self.bridges_base);
        let response: BridgesResponse = self.get_json(&url, "bridges").await?;
        debug!("Fetched {} bridges", response.bridges.len());
        Ok(response.bridges.into_iter().map(|b| b.to_bridge()).collect())
    }

    /// GET a URL and decode the JSON body, mapping failures into the
    /// error taxonomy: transport -> Network, non-success status -> Api,
    /// undecodable body -> Parse.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> Result<T, MetricsError> {
        debug!("Fetching {} from: {}", what, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetricsError::network(format!("Failed to fetch {}: {}", what, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetricsError::api(format!(
                "DefiLlama API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MetricsError::parse(format!("Failed to parse {} response: {}", what, e)))
    }
}

impl Default for LlamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LlamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlamaClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}
