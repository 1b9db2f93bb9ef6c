//! Ranking with percentage shares
//!
//! Sorting is stable and descending by the chosen field, so ties keep the
//! order of the input collection and reruns over the same data produce
//! identical output. Shares are a percentage of the field sum over the
//! entries being ranked; a zero sum yields a share of 0 for every entry,
//! never NaN or infinity.

use std::cmp::Ordering;

/// A record with its derived rank and share
#[derive(Debug, Clone)]
pub struct RankedEntry<T> {
    /// 1-based position in the descending sort
    pub rank: usize,
    /// Percentage of the field sum across the ranked entries
    pub share: f64,
    pub item: T,
}

/// Stable descending sort by an f64 field. Non-comparable values (NaN)
/// are treated as equal, which keeps the sort total and stable.
fn sort_desc_by<T>(items: &mut [T], field: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| field(b).partial_cmp(&field(a)).unwrap_or(Ordering::Equal));
}

/// Rank the full collection: sort descending, 1-based ranks, share of the
/// collection-wide sum. Truncating the result afterwards keeps each
/// entry's share of the whole.
pub fn rank_all<T>(mut items: Vec<T>, field: impl Fn(&T) -> f64) -> Vec<RankedEntry<T>> {
    sort_desc_by(&mut items, &field);
    let total: f64 = items.iter().map(&field).sum();
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let share = if total > 0.0 {
                field(&item) / total * 100.0
            } else {
                0.0
            };
            RankedEntry {
                rank: i + 1,
                share,
                item,
            }
        })
        .collect()
}

/// Rank the top `limit` entries: sort descending, truncate, then compute
/// shares against the sum of the truncated slice. The share here is
/// share-of-displayed-total, not share-of-market.
pub fn rank_top<T>(
    mut items: Vec<T>,
    field: impl Fn(&T) -> f64,
    limit: usize,
) -> Vec<RankedEntry<T>> {
    sort_desc_by(&mut items, &field);
    items.truncate(limit);
    rank_all(items, field)
}
