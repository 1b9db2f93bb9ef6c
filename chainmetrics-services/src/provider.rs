//! Dataset provider abstraction
//!
//! The engine is generic over where the three collections come from. In
//! production that is the DefiLlama client; tests substitute an in-memory
//! provider. Each fetch is a single attempt returning the full collection
//! or an error; a failed required fetch aborts the query.

use async_trait::async_trait;
use chainmetrics_core::{Bridge, ChainTvl, MetricsResult, StablecoinChain};
use chainmetrics_defillama::LlamaClient;

/// Supplier of the three raw collections
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    async fn chains(&self) -> MetricsResult<Vec<ChainTvl>>;

    async fn stablecoin_chains(&self) -> MetricsResult<Vec<StablecoinChain>>;

    async fn bridges(&self) -> MetricsResult<Vec<Bridge>>;
}

#[async_trait]
impl ChainDataProvider for LlamaClient {
    async fn chains(&self) -> MetricsResult<Vec<ChainTvl>> {
        self.get_chains().await
    }

    async fn stablecoin_chains(&self) -> MetricsResult<Vec<StablecoinChain>> {
        self.get_stablecoin_chains().await
    }

    async fn bridges(&self) -> MetricsResult<Vec<Bridge>> {
        self.get_bridges().await
    }
}
