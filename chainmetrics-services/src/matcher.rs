//! Name matching across datasets
//!
//! The three datasets share no identifier, so records are joined on their
//! name after case-folding. The rule lives here, once: lowercase both
//! sides, exact equality, no trimming, no fuzzy matching. A record whose
//! dataset spells the same chain differently simply does not match, and
//! callers treat that as a not-found outcome.

use chainmetrics_core::{ChainTvl, StablecoinChain};

/// Anything addressable by a chain name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for ChainTvl {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for StablecoinChain {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Find the record whose name equals `query` after lowercasing both sides.
///
/// If duplicates exist (they should not), the first match in collection
/// order wins.
pub fn find_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Option<&'a T> {
    let query = query.to_lowercase();
    items.iter().find(|item| item.name().to_lowercase() == query)
}

/// Case-insensitive membership test for a list of chain names
pub fn contains_name(names: &[String], query: &str) -> bool {
    let query = query.to_lowercase();
    names.iter().any(|n| n.to_lowercase() == query)
}
