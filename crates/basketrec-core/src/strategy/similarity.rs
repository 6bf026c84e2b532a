//! Item-to-item similarity: Jaccard index over the orders each item
//! appears in.
//!
//! Rather than intersecting the target's order set with every item's order
//! set, the strategy walks the target's orders once through the
//! order -> items index to count overlaps, then derives each union size as
//! `|T| + |S| - |T ∩ S|`. Items sharing no order with the target still
//! receive a score of `0.0`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::rank::ScoreMap;
use crate::store::TransactionStore;

use super::{CandidateScores, Strategy, StrategyKind};

/// Jaccard similarity between order sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemSimilarity;

impl ItemSimilarity {
    /// Similarity of every distinct item in `store` to `target`,
    /// the target included when it is known.
    pub fn scores(store: &TransactionStore, target: &str) -> ScoreMap {
        let empty = HashSet::new();
        let target_orders = store.orders_of(target).unwrap_or(&empty);

        let mut overlap: HashMap<&str, usize> = HashMap::new();
        for order in target_orders {
            for item in store.items_in_order(order).into_iter().flatten() {
                *overlap.entry(item.as_str()).or_insert(0) += 1;
            }
        }

        store
            .item_orders()
            .iter()
            .map(|(item, orders)| {
                let intersection = overlap.get(item.as_str()).copied().unwrap_or(0);
                let union = target_orders.len() + orders.len() - intersection;
                (item.clone(), ratio(intersection, union))
            })
            .collect()
    }
}

impl Strategy for ItemSimilarity {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Similarity
    }

    fn score(&self, store: &TransactionStore, target: &str) -> Vec<CandidateScores> {
        vec![CandidateScores::uncategorized(Self::scores(store, target))]
    }
}

/// Jaccard index `|a ∩ b| / |a ∪ b|`, defined as `0.0` when both sets are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|x| large.contains(*x)).count();
    ratio(intersection, a.len() + b.len() - intersection)
}

fn ratio(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
