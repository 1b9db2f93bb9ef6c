//! Heuristic chain classification
//!
//! Chains are bucketed into L2 / L1 / alt-L1 by case-insensitive substring
//! containment against two curated name lists. This is a heuristic, not an
//! authoritative taxonomy: a chain whose name happens to contain a listed
//! substring will be misclassified. The lists are configuration data and
//! can be replaced without touching the matching algorithm.

use serde::{Deserialize, Serialize};

/// Category filter for chain views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No filter
    All,
    L1,
    L2,
    #[serde(rename = "alt-l1")]
    AltL1,
}

impl Category {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Category::All),
            "l1" => Some(Category::L1),
            "l2" => Some(Category::L2),
            "alt-l1" | "altl1" => Some(Category::AltL1),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::L1 => "l1",
            Category::L2 => "l2",
            Category::AltL1 => "alt-l1",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

/// Curated substring lists driving the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLists {
    /// Substrings identifying Ethereum L2s
    pub l2_names: Vec<String>,
    /// Substrings identifying major L1s
    pub l1_names: Vec<String>,
}

impl Default for CategoryLists {
    fn default() -> Self {
        let l2_names = [
            "arbitrum", "optimism", "base", "zksync", "starknet", "scroll", "linea", "mantle",
            "blast", "mode", "manta", "metis", "boba", "polygon zkevm",
        ];
        let l1_names = [
            "ethereum", "bitcoin", "solana", "bsc", "avalanche", "cardano", "polkadot", "cosmos",
            "near", "aptos", "sui", "tron", "ton", "polygon",
        ];
        Self {
            l2_names: l2_names.iter().map(|s| s.to_string()).collect(),
            l1_names: l1_names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryLists {
    /// Classify a chain name. Total: every name maps to exactly one of
    /// L2, L1 or AltL1 (never All). The L2 list is checked first so that
    /// names matching both lists (e.g. "Polygon zkEVM") land on L2.
    pub fn classify(&self, name: &str) -> Category {
        let name = name.to_lowercase();
        if self.l2_names.iter().any(|s| name.contains(s.as_str())) {
            Category::L2
        } else if self.l1_names.iter().any(|s| name.contains(s.as_str())) {
            Category::L1
        } else {
            Category::AltL1
        }
    }

    /// Whether a chain name passes the given category filter
    pub fn matches(&self, name: &str, category: Category) -> bool {
        match category {
            Category::All => true,
            other => self.classify(name) == other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_chains() {
        let lists = CategoryLists::default();
        assert_eq!(lists.classify("Ethereum"), Category::L1);
        assert_eq!(lists.classify("Arbitrum"), Category::L2);
        assert_eq!(lists.classify("Base"), Category::L2);
        assert_eq!(lists.classify("Osmosis"), Category::AltL1);
        assert_eq!(lists.classify("Fantom"), Category::AltL1);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let lists = CategoryLists::default();
        assert_eq!(lists.classify("ETHEREUM"), Category::L1);
        assert_eq!(lists.classify("arbitrum"), Category::L2);
    }

    #[test]
    fn test_substring_containment_is_a_heuristic() {
        let lists = CategoryLists::default();
        // "Scrollback" contains "scroll"; the heuristic misclassifies it
        // and that is the specified behavior.
        assert_eq!(lists.classify("Scrollback"), Category::L2);
        assert_eq!(lists.classify("Coinbase"), Category::L2);
    }

    #[test]
    fn test_l2_list_wins_over_l1_list() {
        let lists = CategoryLists::default();
        // contains both "polygon" (L1 list) and "polygon zkevm" (L2 list)
        assert_eq!(lists.classify("Polygon zkEVM"), Category::L2);
        assert_eq!(lists.classify("Polygon"), Category::L1);
    }

    #[test]
    fn test_classify_is_total() {
        let lists = CategoryLists::default();
        for name in ["", "x", "Ethereum", "Arbitrum", "Something Unheard Of"] {
            let category = lists.classify(name);
            assert_ne!(category, Category::All);
        }
    }

    #[test]
    fn test_matches_filter() {
        let lists = CategoryLists::default();
        assert!(lists.matches("Ethereum", Category::All));
        assert!(lists.matches("Ethereum", Category::L1));
        assert!(!lists.matches("Ethereum", Category::L2));
        assert!(lists.matches("Osmosis", Category::AltL1));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("all"), Some(Category::All));
        assert_eq!(Category::parse("L2"), Some(Category::L2));
        assert_eq!(Category::parse("alt-l1"), Some(Category::AltL1));
        assert_eq!(Category::parse("l3"), None);
    }

    #[test]
    fn test_lists_are_configuration() {
        let lists: CategoryLists = serde_json::from_str(
            r#"{ "l2_names": ["rollchain"], "l1_names": ["basechain"] }"#,
        )
        .unwrap();
        assert_eq!(lists.classify("Rollchain One"), Category::L2);
        assert_eq!(lists.classify("Basechain"), Category::L1);
        assert_eq!(lists.classify("Ethereum"), Category::AltL1);
    }
}
