//! Most popular items within each category the target belongs to.

use crate::store::TransactionStore;

use super::{count_items, CandidateScores, Strategy, StrategyKind};

/// Counts item occurrences per category of the target. An item filed
/// under several categories yields one candidate list per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPopularity;

impl Strategy for CategoryPopularity {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CategoryPopularity
    }

    fn score(&self, store: &TransactionStore, target: &str) -> Vec<CandidateScores> {
        store
            .categories_of(target)
            .map(|category| CandidateScores {
                category: Some(category.to_string()),
                scores: count_items(store.records_in_category(category)),
            })
            .collect()
    }
}
