//! DefiLlama API response types
//!
//! These types mirror the DefiLlama API responses and are converted
//! to chainmetrics-core types for use in the application.

use chainmetrics_core::{Bridge, ChainTvl, StablecoinChain};
use serde::Deserialize;

/// One entry of GET https://api.llama.fi/v2/chains
#[derive(Debug, Clone, Deserialize)]
pub struct LlamaChain {
    /// Chain name (e.g., "Ethereum")
    pub name: String,

    /// Total value locked in USD
    #[serde(default)]
    pub tvl: f64,

    /// Native token symbol
    #[serde(default, rename = "tokenSymbol")]
    pub token_symbol: Option<String>,

    /// CoinGecko identifier
    #[serde(default)]
    pub gecko_id: Option<String>,

    /// EVM chain id
    #[serde(default, rename = "chainId")]
    pub chain_id: Option<i64>,
}

impl LlamaChain {
    /// Convert to the core chain record
    pub fn to_chain_tvl(self) -> ChainTvl {
        ChainTvl {
            name: self.name,
            tvl: self.tvl,
            token_symbol: self.token_symbol,
            gecko_id: self.gecko_id,
            chain_id: self.chain_id,
        }
    }
}

/// One entry of GET https://stablecoins.llama.fi/stablecoinchains
#[derive(Debug, Clone, Deserialize)]
pub struct LlamaStablecoinChain {
    /// Chain name
    pub name: String,

    /// Circulating supply keyed by peg type; only the USD peg is used
    #[serde(default, rename = "totalCirculatingUSD")]
    pub total_circulating_usd: Option<TotalCirculating>,

    #[serde(default, rename = "tokenSymbol")]
    pub token_symbol: Option<String>,
}

/// The per-peg circulating supply map; non-USD pegs are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct TotalCirculating {
    #[serde(default, rename = "peggedUSD")]
    pub pegged_usd: Option<f64>,
}

impl LlamaStablecoinChain {
    /// Convert to the core stablecoin record, collapsing the peg map
    pub fn to_stablecoin_chain(self) -> StablecoinChain {
        StablecoinChain {
            name: self.name,
            total_circulating_usd: self.total_circulating_usd.and_then(|t| t.pegged_usd),
            token_symbol: self.token_symbol,
        }
    }
}

/// Response from GET https://bridges.llama.fi/bridges?includeChains=true
#[derive(Debug, Clone, Deserialize)]
pub struct BridgesResponse {
    pub bridges: Vec<LlamaBridge>,
}

/// A bridge from the DefiLlama bridges API
#[derive(Debug, Clone, Deserialize)]
pub struct LlamaBridge {
    pub id: u64,

    pub name: String,

    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,

    /// Volume over the last 24 hours, USD
    #[serde(default, rename = "lastDailyVolume", alias = "volumePrevDay")]
    pub last_daily_volume: f64,

    /// Volume over the last 7 days, USD
    #[serde(default, rename = "weeklyVolume")]
    pub weekly_volume: f64,

    /// Volume over the last 30 days, USD
    #[serde(default, rename = "monthlyVolume")]
    pub monthly_volume: f64,

    /// Supported chain names
    #[serde(default)]
    pub chains: Vec<String>,
}

impl LlamaBridge {
    /// Convert to the core bridge record
    pub fn to_bridge(self) -> Bridge {
        let display_name = self.display_name.unwrap_or_else(|| self.name.clone());
        Bridge {
            id: self.id,
            name: self.name,
            display_name,
            volume_prev_day: self.last_daily_volume,
            volume_prev_week: self.weekly_volume,
            volume_prev_month: self.monthly_volume,
            chains: self.chains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_deserialization() {
        let json = r#"{
            "gecko_id": "ethereum",
            "tvl": 50000000000.0,
            "tokenSymbol": "ETH",
            "name": "Ethereum",
            "chainId": 1
        }"#;
        let chain: LlamaChain = serde_json::from_str(json).unwrap();
        let core = chain.to_chain_tvl();
        assert_eq!(core.name, "Ethereum");
        assert_eq!(core.tvl, 50_000_000_000.0);
        assert_eq!(core.token_symbol.as_deref(), Some("ETH"));
        assert_eq!(core.gecko_id.as_deref(), Some("ethereum"));
        assert_eq!(core.chain_id, Some(1));
    }

    #[test]
    fn test_chain_with_missing_optionals() {
        let json = r#"{ "name": "SomeAppChain", "tvl": 0.0 }"#;
        let chain: LlamaChain = serde_json::from_str(json).unwrap();
        let core = chain.to_chain_tvl();
        assert_eq!(core.tvl, 0.0);
        assert!(core.token_symbol.is_none());
        assert!(core.chain_id.is_none());
    }

    #[test]
    fn test_stablecoin_peg_map_collapses_to_usd() {
        let json = r#"{
            "name": "Tron",
            "totalCirculatingUSD": { "peggedUSD": 60000000000.0, "peggedEUR": 12.0 },
            "tokenSymbol": "TRX"
        }"#;
        let chain: LlamaStablecoinChain = serde_json::from_str(json).unwrap();
        let core = chain.to_stablecoin_chain();
        assert_eq!(core.total_circulating_usd, Some(60_000_000_000.0));

        let json = r#"{ "name": "Obscure", "totalCirculatingUSD": {} }"#;
        let chain: LlamaStablecoinChain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.to_stablecoin_chain().total_circulating_usd, None);
    }

    #[test]
    fn test_bridge_display_name_falls_back_to_name() {
        let json = r#"{
            "bridges": [
                {
                    "id": 26,
                    "name": "stargate",
                    "displayName": "Stargate",
                    "lastDailyVolume": 1000000.0,
                    "weeklyVolume": 7000000.0,
                    "monthlyVolume": 30000000.0,
                    "chains": ["Ethereum", "Arbitrum"]
                },
                { "id": 3, "name": "hop" }
            ]
        }"#;
        let response: BridgesResponse = serde_json::from_str(json).unwrap();
        let bridges: Vec<_> = response
            .bridges
            .into_iter()
            .map(|b| b.to_bridge())
            .collect();

        assert_eq!(bridges[0].display_name, "Stargate");
        assert_eq!(bridges[0].chains.len(), 2);
        assert_eq!(bridges[1].display_name, "hop");
        assert_eq!(bridges[1].volume_prev_day, 0.0);
    }
}
