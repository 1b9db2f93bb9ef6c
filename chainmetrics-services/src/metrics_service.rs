//! Metrics service: the six query views
//!
//! Each view fetches the collections it needs (concurrently when more than
//! one), joins them by case-folded name, and returns a structured response
//! with an evaluation timestamp and every USD quantity in both raw and
//! rendered form. Views are stateless and independent; a failed required
//! fetch aborts the whole query, while a missed name lookup degrades into
//! a structured not-found payload.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use chainmetrics_core::{
    format_share, format_usd, format_usd_billions, BridgePeriod, ChainTvl, Clock, MetricsResult,
    StablecoinChain, SystemClock,
};

use crate::classifier::{Category, CategoryLists};
use crate::matcher::{contains_name, find_by_name};
use crate::provider::ChainDataProvider;
use crate::ranking::{rank_all, rank_top, RankedEntry};

/// How many chains the overview shows
const OVERVIEW_TOP_N: usize = 5;
/// How many valid names a not-found payload offers back
const NOT_FOUND_SAMPLE: usize = 20;
/// How many supported chain names a bridge entry lists
const BRIDGE_TOP_CHAINS: usize = 5;

/// Service answering chain metric queries from a dataset provider
pub struct MetricsService<P> {
    provider: Arc<P>,
    clock: Arc<dyn Clock>,
    categories: CategoryLists,
}

impl<P: ChainDataProvider> MetricsService<P> {
    /// Create a service with the system clock and curated category lists
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            clock: Arc::new(SystemClock),
            categories: CategoryLists::default(),
        }
    }

    /// Replace the clock (tests pin it to a fixed instant)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the category lists
    pub fn with_category_lists(mut self, categories: CategoryLists) -> Self {
        self.categories = categories;
        self
    }

    /// Ecosystem overview: global TVL total and the top five chains
    #[instrument(skip(self))]
    pub async fn overview(&self) -> MetricsResult<OverviewResponse> {
        let chains = self.provider.chains().await?;
        let chain_count = chains.len();
        let total_tvl_raw: f64 = chains.iter().map(|c| c.tvl).sum();

        let mut ranked = rank_all(chains, |c| c.tvl);
        ranked.truncate(OVERVIEW_TOP_N);
        let top_chains = ranked.into_iter().map(ChainRankEntry::from_ranked).collect();

        info!("Overview over {} chains", chain_count);

        Ok(OverviewResponse {
            timestamp: self.clock.now(),
            chain_count,
            total_tvl: format_usd(total_tvl_raw),
            total_tvl_raw,
            top_chains,
        })
    }

    /// Detail for one chain: TVL, rank among all chains, and best-effort
    /// stablecoin supply. A miss on the chain collection produces a
    /// not-found payload with a sample of valid names, not an error.
    #[instrument(skip(self))]
    pub async fn chain_detail(&self, name: &str) -> MetricsResult<ChainDetailResponse> {
        let (chains, stablecoins) = tokio::join!(
            self.provider.chains(),
            self.provider.stablecoin_chains()
        );
        let chains = chains?;
        let stablecoins = stablecoins?;

        // Sample of valid names in original collection order, offered back
        // when the lookup misses.
        let available_chains: Vec<String> = chains
            .iter()
            .take(NOT_FOUND_SAMPLE)
            .map(|c| c.name.clone())
            .collect();

        // Rank the full sorted list so rank and share are consistent with
        // the overview, then look the chain up inside it.
        let ranked = rank_all(chains, |c| c.tvl);
        let query = name.to_lowercase();
        let Some(entry) = ranked.iter().find(|e| e.item.name.to_lowercase() == query) else {
            debug!("Chain not found: {}", name);
            return Ok(ChainDetailResponse::NotFound(ChainNotFound {
                timestamp: self.clock.now(),
                query: name.to_string(),
                error: format!("Chain not found: {}", name),
                available_chains,
            }));
        };

        let stablecoin_detail = find_by_name(&stablecoins, name).map(|s| {
            let total_raw = s.supply();
            StablecoinDetail {
                total: format_usd_billions(total_raw),
                total_raw,
            }
        });

        Ok(ChainDetailResponse::Found(ChainDetail {
            timestamp: self.clock.now(),
            name: entry.item.name.clone(),
            rank: entry.rank,
            tvl: format_usd(entry.item.tvl),
            tvl_raw: entry.item.tvl,
            share: entry.share,
            share_display: format_share(entry.share),
            token_symbol: entry.item.token_symbol.clone(),
            gecko_id: entry.item.gecko_id.clone(),
            chain_id: entry.item.chain_id,
            stablecoins: stablecoin_detail,
        }))
    }

    /// Filtered, ranked chain list. Shares are relative to the filtered
    /// set (computed before the limit is applied).
    #[instrument(skip(self))]
    pub async fn top_chains(&self, params: TopChainsParams) -> MetricsResult<TopChainsResponse> {
        let chains = self.provider.chains().await?;

        let filtered: Vec<ChainTvl> = chains
            .into_iter()
            .filter(|c| c.tvl >= params.min_tvl)
            .filter(|c| self.categories.matches(&c.name, params.category))
            .collect();
        let total_tvl_raw: f64 = filtered.iter().map(|c| c.tvl).sum();

        let mut ranked = rank_all(filtered, |c| c.tvl);
        ranked.truncate(params.limit);
        let entries: Vec<ChainRankEntry> =
            ranked.into_iter().map(ChainRankEntry::from_ranked).collect();

        info!(
            "Top chains: {} entries (category {})",
            entries.len(),
            params.category.as_str()
        );

        Ok(TopChainsResponse {
            timestamp: self.clock.now(),
            limit: params.limit,
            min_tvl: params.min_tvl,
            category: params.category,
            count: entries.len(),
            total_tvl: format_usd(total_tvl_raw),
            total_tvl_raw,
            chains: entries,
        })
    }

    /// Stablecoin supply distribution across chains. Chains with absent or
    /// zero supply are dropped; shares are of the displayed top-N total.
    #[instrument(skip(self))]
    pub async fn stablecoin_distribution(
        &self,
        limit: usize,
    ) -> MetricsResult<StablecoinDistributionResponse> {
        let stablecoins = self.provider.stablecoin_chains().await?;

        let with_supply: Vec<StablecoinChain> = stablecoins
            .into_iter()
            .filter(|s| s.supply() > 0.0)
            .collect();

        let ranked = rank_top(with_supply, |s| s.supply(), limit);
        let total_raw: f64 = ranked.iter().map(|e| e.item.supply()).sum();
        let distribution: Vec<StablecoinEntry> = ranked
            .into_iter()
            .map(|e| StablecoinEntry {
                rank: e.rank,
                name: e.item.name.clone(),
                supply: format_usd_billions(e.item.supply()),
                supply_raw: e.item.supply(),
                share: e.share,
                share_display: format_share(e.share),
                token_symbol: e.item.token_symbol,
            })
            .collect();

        Ok(StablecoinDistributionResponse {
            timestamp: self.clock.now(),
            limit,
            chain_count: distribution.len(),
            total_stablecoins: format_usd_billions(total_raw),
            total_stablecoins_raw: total_raw,
            distribution,
        })
    }

    /// Bridge ranking for one volume period. Bridges with no volume in the
    /// period are excluded entirely; shares are of the displayed total.
    #[instrument(skip(self))]
    pub async fn bridge_rankings(
        &self,
        limit: usize,
        period: BridgePeriod,
    ) -> MetricsResult<BridgeRankingsResponse> {
        let bridges = self.provider.bridges().await?;

        let active: Vec<_> = bridges
            .into_iter()
            .filter(|b| b.volume(period) > 0.0)
            .collect();

        let ranked = rank_top(active, |b| b.volume(period), limit);
        let total_raw: f64 = ranked.iter().map(|e| e.item.volume(period)).sum();
        let entries: Vec<BridgeEntry> = ranked
            .into_iter()
            .map(|e| {
                let volume_raw = e.item.volume(period);
                BridgeEntry {
                    rank: e.rank,
                    name: e.item.display_name.clone(),
                    volume: format_usd(volume_raw),
                    volume_raw,
                    share: e.share,
                    share_display: format_share(e.share),
                    chain_count: e.item.chains.len(),
                    top_chains: e.item.chains.into_iter().take(BRIDGE_TOP_CHAINS).collect(),
                }
            })
            .collect();

        info!("Bridge rankings: {} entries over {}", entries.len(), period.as_str());

        Ok(BridgeRankingsResponse {
            timestamp: self.clock.now(),
            period,
            limit,
            count: entries.len(),
            total_volume: format_usd(total_raw),
            total_volume_raw: total_raw,
            bridges: entries,
        })
    }

    /// Side-by-side comparison of two to five chains across all three
    /// datasets. Missing entities appear as found:false with zero values
    /// and can never win; ties break to the first name in input order.
    #[instrument(skip(self))]
    pub async fn compare_chains(&self, names: &[String]) -> MetricsResult<CompareResponse> {
        let (chains, stablecoins, bridges) = tokio::join!(
            self.provider.chains(),
            self.provider.stablecoin_chains(),
            self.provider.bridges()
        );
        let chains = chains?;
        let stablecoins = stablecoins?;
        let bridges = bridges?;

        let ranked = rank_all(chains, |c| c.tvl);

        let compared: Vec<ComparedChain> = names
            .iter()
            .map(|name| {
                let query = name.to_lowercase();
                let chain_entry = ranked.iter().find(|e| e.item.name.to_lowercase() == query);
                let stablecoin = find_by_name(&stablecoins, name);
                let bridge_count = bridges
                    .iter()
                    .filter(|b| contains_name(&b.chains, name))
                    .count();

                let (found, tvl_raw, rank) = match chain_entry {
                    Some(entry) => (true, entry.item.tvl, Some(entry.rank)),
                    None => (false, 0.0, None),
                };
                let stablecoins_raw = stablecoin.map(|s| s.supply()).unwrap_or(0.0);

                ComparedChain {
                    name: name.clone(),
                    found,
                    tvl: format_usd(tvl_raw),
                    tvl_raw,
                    rank,
                    stablecoins: format_usd_billions(stablecoins_raw),
                    stablecoins_raw,
                    bridge_count,
                }
            })
            .collect();

        let winners = ComparisonWinners {
            highest_tvl: max_by_field(&compared, |c| c.tvl_raw),
            highest_stablecoins: max_by_field(&compared, |c| c.stablecoins_raw),
        };

        Ok(CompareResponse {
            timestamp: self.clock.now(),
            chains: compared,
            winners,
        })
    }
}

/// Name of the entry with the maximum field value. Strict comparison while
/// scanning in input order keeps the first entry on ties, which is the
/// contract when every compared chain is missing (all zeros).
fn max_by_field(compared: &[ComparedChain], field: impl Fn(&ComparedChain) -> f64) -> String {
    let mut best: Option<&ComparedChain> = None;
    for entry in compared {
        match best {
            Some(current) if field(entry) > field(current) => best = Some(entry),
            None => best = Some(entry),
            _ => {}
        }
    }
    best.map(|c| c.name.clone()).unwrap_or_default()
}

impl<P> Clone for MetricsService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            clock: Arc::clone(&self.clock),
            categories: self.categories.clone(),
        }
    }
}

impl<P> std::fmt::Debug for MetricsService<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsService").finish()
    }
}

// ============================================================================
// View responses
// ============================================================================

/// One chain in a ranked list
#[derive(Debug, Clone, Serialize)]
pub struct ChainRankEntry {
    pub rank: usize,
    pub name: String,
    pub tvl: String,
    pub tvl_raw: f64,
    pub share: f64,
    pub share_display: String,
}

impl ChainRankEntry {
    fn from_ranked(entry: RankedEntry<ChainTvl>) -> Self {
        Self {
            rank: entry.rank,
            name: entry.item.name,
            tvl: format_usd(entry.item.tvl),
            tvl_raw: entry.item.tvl,
            share: entry.share,
            share_display: format_share(entry.share),
        }
    }
}

/// Response for the ecosystem overview
#[derive(Debug, Clone, Serialize)]
pub struct OverviewResponse {
    pub timestamp: DateTime<Utc>,
    pub chain_count: usize,
    pub total_tvl: String,
    pub total_tvl_raw: f64,
    pub top_chains: Vec<ChainRankEntry>,
}

/// Response for a chain detail query: either the detail or a structured
/// not-found payload
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChainDetailResponse {
    Found(ChainDetail),
    NotFound(ChainNotFound),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainDetail {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub rank: usize,
    pub tvl: String,
    pub tvl_raw: f64,
    pub share: f64,
    pub share_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gecko_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<i64>,
    /// None when the chain has no entry in the stablecoin dataset
    pub stablecoins: Option<StablecoinDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StablecoinDetail {
    pub total: String,
    pub total_raw: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainNotFound {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub error: String,
    /// First few valid names in original collection order, so the caller
    /// can self-correct
    pub available_chains: Vec<String>,
}

/// Validated parameters for the filtered chain list
#[derive(Debug, Clone, Copy)]
pub struct TopChainsParams {
    pub limit: usize,
    pub min_tvl: f64,
    pub category: Category,
}

impl Default for TopChainsParams {
    fn default() -> Self {
        Self {
            limit: 20,
            min_tvl: 0.0,
            category: Category::All,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopChainsResponse {
    pub timestamp: DateTime<Utc>,
    pub limit: usize,
    pub min_tvl: f64,
    pub category: Category,
    pub count: usize,
    pub total_tvl: String,
    pub total_tvl_raw: f64,
    pub chains: Vec<ChainRankEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StablecoinEntry {
    pub rank: usize,
    pub name: String,
    pub supply: String,
    pub supply_raw: f64,
    pub share: f64,
    pub share_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StablecoinDistributionResponse {
    pub timestamp: DateTime<Utc>,
    pub limit: usize,
    pub chain_count: usize,
    pub total_stablecoins: String,
    pub total_stablecoins_raw: f64,
    pub distribution: Vec<StablecoinEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BridgeEntry {
    pub rank: usize,
    pub name: String,
    pub volume: String,
    pub volume_raw: f64,
    pub share: f64,
    pub share_display: String,
    pub chain_count: usize,
    pub top_chains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BridgeRankingsResponse {
    pub timestamp: DateTime<Utc>,
    pub period: BridgePeriod,
    pub limit: usize,
    pub count: usize,
    pub total_volume: String,
    pub total_volume_raw: f64,
    pub bridges: Vec<BridgeEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparedChain {
    /// Echoed input name
    pub name: String,
    pub found: bool,
    pub tvl: String,
    pub tvl_raw: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub stablecoins: String,
    pub stablecoins_raw: f64,
    pub bridge_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonWinners {
    pub highest_tvl: String,
    pub highest_stablecoins: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub timestamp: DateTime<Utc>,
    pub chains: Vec<ComparedChain>,
    pub winners: ComparisonWinners,
}
