//! Top-N selection shared by every strategy.
//!
//! 1. Remove the target from the score map (it must be present).
//! 2. Sort by score (desc), then item identifier (asc).
//! 3. Truncate to `n`.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::UnknownTarget;
use crate::models::Recommendation;

/// Item identifier to score, as produced by a strategy.
pub type ScoreMap = HashMap<String, f64>;

/// Rank `scores` and keep the best `n`, excluding `target`.
///
/// Fails with [`UnknownTarget`] when `target` has no entry in
/// `scores`. Returns fewer than `n` entries when fewer candidates remain.
pub fn select_top_n(
    mut scores: ScoreMap,
    target: &str,
    n: usize,
) -> Result<Vec<Recommendation>, UnknownTarget> {
    if scores.remove(target).is_none() {
        return Err(UnknownTarget {
            item: target.to_string(),
        });
    }

    let mut ranked: Vec<Recommendation> = scores
        .into_iter()
        .map(|(item, score)| Recommendation { item, score })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.item.cmp(&b.item))
    });

    ranked.truncate(n);

    Ok(ranked)
}
