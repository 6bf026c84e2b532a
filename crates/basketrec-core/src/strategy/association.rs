//! Items most often bought in the same orders as the target.

use crate::rank::ScoreMap;
use crate::store::TransactionStore;

use super::{count_items, CandidateScores, Strategy, StrategyKind};

/// Market-basket co-occurrence counts over the orders containing the target.
///
/// The target itself is always counted (every qualifying order contains
/// it) and is removed later by ranking. A target with no orders produces an
/// empty map, which ranking reports as an unknown target.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoPurchase;

impl Strategy for CoPurchase {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CoPurchase
    }

    fn score(&self, store: &TransactionStore, target: &str) -> Vec<CandidateScores> {
        let scores = match store.orders_of(target) {
            Some(orders) => count_items(
                orders
                    .iter()
                    .flat_map(|order| store.records_in_order(order)),
            ),
            None => ScoreMap::new(),
        };
        vec![CandidateScores::uncategorized(scores)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::fixtures::scenario_store;

    #[test]
    fn test_counts_items_across_target_orders() {
        let lists = CoPurchase.score(&scenario_store(), "X");

        assert_eq!(lists.len(), 1);
        let scores = &lists[0].scores;
        assert_eq!(scores["X"], 2.0);
        assert_eq!(scores["Y"], 1.0);
        assert_eq!(scores["Z"], 1.0);
    }

    #[test]
    fn test_ignores_orders_without_target() {
        let lists = CoPurchase.score(&scenario_store(), "Y");
        let scores = &lists[0].scores;

        assert_eq!(scores.len(), 2);
        assert!(!scores.contains_key("Z"));
    }

    #[test]
    fn test_unknown_target_yields_empty_map() {
        let lists = CoPurchase.score(&scenario_store(), "nope");
        assert_eq!(lists.len(), 1);
        assert!(lists[0].scores.is_empty());
    }
}
