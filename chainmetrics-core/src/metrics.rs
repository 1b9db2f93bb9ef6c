//! Domain records for the three DefiLlama datasets
//!
//! The three collections share no identifier; records relate to each other
//! only through case-insensitive equality of their `name` fields.

use serde::{Deserialize, Serialize};

/// A blockchain network with its total value locked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTvl {
    /// Chain name, the join key across all three datasets
    pub name: String,

    /// Total value locked in USD (may be zero)
    pub tvl: f64,

    /// Native token symbol (e.g., "ETH")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,

    /// CoinGecko identifier for the native token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gecko_id: Option<String>,

    /// EVM chain id, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<i64>,
}

/// Stablecoin supply attributed to one chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StablecoinChain {
    /// Chain name, matched against [`ChainTvl::name`] case-insensitively
    pub name: String,

    /// USD-pegged circulating supply; absent and zero both mean "no supply"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_circulating_usd: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
}

impl StablecoinChain {
    /// Circulating supply with absent treated as zero
    pub fn supply(&self) -> f64 {
        self.total_circulating_usd.unwrap_or(0.0)
    }
}

/// A cross-chain bridge with volume figures per period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bridge {
    pub id: u64,

    pub name: String,

    /// Human-readable name, preferred over `name` for display
    pub display_name: String,

    /// Volume bridged over the last 24 hours, USD
    pub volume_prev_day: f64,

    /// Volume bridged over the last 7 days, USD
    pub volume_prev_week: f64,

    /// Volume bridged over the last 30 days, USD
    pub volume_prev_month: f64,

    /// Chains this bridge supports, each expected to match a
    /// [`ChainTvl::name`] case-insensitively
    pub chains: Vec<String>,
}

impl Bridge {
    /// Volume for the requested period
    pub fn volume(&self, period: BridgePeriod) -> f64 {
        match period {
            BridgePeriod::Day => self.volume_prev_day,
            BridgePeriod::Week => self.volume_prev_week,
            BridgePeriod::Month => self.volume_prev_month,
        }
    }
}

/// Period window for bridge volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgePeriod {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl BridgePeriod {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "24h" => Some(BridgePeriod::Day),
            "7d" => Some(BridgePeriod::Week),
            "30d" => Some(BridgePeriod::Month),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgePeriod::Day => "24h",
            BridgePeriod::Week => "7d",
            BridgePeriod::Month => "30d",
        }
    }
}

impl Default for BridgePeriod {
    fn default() -> Self {
        BridgePeriod::Day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_roundtrip() {
        for s in ["24h", "7d", "30d"] {
            let p = BridgePeriod::parse(s).unwrap();
            assert_eq!(p.as_str(), s);
        }
        assert_eq!(BridgePeriod::parse("1h"), None);
        assert_eq!(BridgePeriod::parse("7D"), Some(BridgePeriod::Week));
    }

    #[test]
    fn test_bridge_volume_selection() {
        let bridge = Bridge {
            id: 1,
            name: "stargate".to_string(),
            display_name: "Stargate".to_string(),
            volume_prev_day: 10.0,
            volume_prev_week: 70.0,
            volume_prev_month: 300.0,
            chains: vec!["Ethereum".to_string()],
        };
        assert_eq!(bridge.volume(BridgePeriod::Day), 10.0);
        assert_eq!(bridge.volume(BridgePeriod::Week), 70.0);
        assert_eq!(bridge.volume(BridgePeriod::Month), 300.0);
    }

    #[test]
    fn test_stablecoin_supply_defaults_to_zero() {
        let chain = StablecoinChain {
            name: "Tron".to_string(),
            total_circulating_usd: None,
            token_symbol: None,
        };
        assert_eq!(chain.supply(), 0.0);
    }
}
