//! Scoring strategies.
//!
//! A [`Strategy`] turns the store and a target item into one or more
//! [`CandidateScores`]. Strategies never rank or truncate: the engine
//! feeds every candidate set through [`select_top_n`](crate::rank::select_top_n).
//!
//! | Strategy | Score | Lists emitted |
//! |----------|-------|---------------|
//! | [`CategoryPopularity`] | record count within the category | one per category of the target |
//! | [`CoPurchase`] | record count within the target's orders | one |
//! | [`ItemSimilarity`] | Jaccard index of order sets | one |

pub mod association;
pub mod popularity;
pub mod similarity;

use serde::Serialize;

use crate::models::TransactionRecord;
use crate::rank::ScoreMap;
use crate::store::TransactionStore;

pub use association::CoPurchase;
pub use popularity::CategoryPopularity;
pub use similarity::{jaccard, ItemSimilarity};

/// Identifies which strategy produced a section of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    CategoryPopularity,
    CoPurchase,
    Similarity,
}

impl StrategyKind {
    /// Human-readable heading used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::CategoryPopularity => "popular items in the category",
            StrategyKind::CoPurchase => "popular items other customers bought",
            StrategyKind::Similarity => "similar products",
        }
    }

    /// Whether scores are meaningful enough to show next to the items.
    pub fn shows_scores(&self) -> bool {
        matches!(self, StrategyKind::Similarity)
    }
}

/// Scores for one candidate list, before ranking.
#[derive(Debug, Clone, Default)]
pub struct CandidateScores {
    /// Category the list is scoped to, for per-category strategies.
    pub category: Option<String>,
    pub scores: ScoreMap,
}

impl CandidateScores {
    pub fn uncategorized(scores: ScoreMap) -> Self {
        Self {
            category: None,
            scores,
        }
    }
}

/// A recommendation heuristic over a read-only store.
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Score candidates for `target`. An empty vector means the strategy
    /// has nothing to rank for this target.
    fn score(&self, store: &TransactionStore, target: &str) -> Vec<CandidateScores>;
}

/// The three built-in strategies, in report order.
pub fn default_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(CategoryPopularity),
        Box::new(CoPurchase),
        Box::new(ItemSimilarity),
    ]
}

/// Count records per item.
pub(crate) fn count_items<'a, I>(records: I) -> ScoreMap
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut counts = ScoreMap::new();
    for record in records {
        *counts.entry(record.item.clone()).or_insert(0.0) += 1.0;
    }
    counts
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::TransactionRecord;
    use crate::store::TransactionStore;

    /// Two orders, two categories: X and Y share order 1, X and Z share order 2.
    pub fn scenario_store() -> TransactionStore {
        TransactionStore::from_records(vec![
            TransactionRecord::new("1", "A", "X"),
            TransactionRecord::new("1", "A", "Y"),
            TransactionRecord::new("2", "A", "X"),
            TransactionRecord::new("2", "B", "Z"),
        ])
    }
}
