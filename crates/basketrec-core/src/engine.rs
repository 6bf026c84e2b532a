//! Recommendation engine: runs every strategy against one target and ranks
//! each candidate list with the shared top-N routine.
//!
//! Strategies run in a fixed order (category popularity, co-purchase,
//! similarity) and are isolated from one another: a ranking failure in one
//! section is recorded in that section's [`SectionStatus`] and the
//! remaining strategies still run.

use serde::Serialize;

use crate::error::{RecsError, Result};
use crate::models::Recommendation;
use crate::rank::select_top_n;
use crate::store::TransactionStore;
use crate::strategy::{default_strategies, Strategy, StrategyKind};

/// Outcome of ranking one candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    /// Candidates were ranked; the list may still be empty.
    Ranked,
    /// The target had no score in this candidate set.
    TargetNotFound,
}

/// One labelled list of recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub strategy: StrategyKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub show_scores: bool,
    #[serde(flatten)]
    pub status: SectionStatus,
    pub recommendations: Vec<Recommendation>,
}

/// Everything produced by one [`Engine::recommend`] call.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub target: String,
    pub limit: usize,
    /// False when the target appears in no transaction at all.
    pub target_known: bool,
    pub sections: Vec<Section>,
}

impl RecommendationReport {
    pub fn sections_for(&self, kind: StrategyKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.strategy == kind)
    }
}

pub struct Engine {
    store: TransactionStore,
    limit: usize,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Engine {
    /// Engine with the three built-in strategies.
    pub fn new(store: TransactionStore, limit: usize) -> Result<Self> {
        Self::with_strategies(store, limit, default_strategies())
    }

    pub fn with_strategies(
        store: TransactionStore,
        limit: usize,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self> {
        if limit == 0 {
            return Err(RecsError::InvalidLimit { limit });
        }
        Ok(Self {
            store,
            limit,
            strategies,
        })
    }

    /// Run every strategy for `target`, in order, and collect the sections.
    pub fn recommend(&self, target: &str) -> RecommendationReport {
        let target_known = self.store.contains_item(target);
        if !target_known {
            tracing::warn!(item = target, "target item appears in no transaction");
        }

        let mut sections = Vec::new();
        for strategy in &self.strategies {
            let kind = strategy.kind();
            for candidates in strategy.score(&self.store, target) {
                let (status, recommendations) =
                    match select_top_n(candidates.scores, target, self.limit) {
                        Ok(ranked) => (SectionStatus::Ranked, ranked),
                        Err(err) => {
                            tracing::debug!(
                                strategy = kind.label(),
                                %err,
                                "target missing from candidate set"
                            );
                            (SectionStatus::TargetNotFound, Vec::new())
                        }
                    };

                sections.push(Section {
                    strategy: kind,
                    label: kind.label(),
                    category: candidates.category,
                    show_scores: kind.shows_scores(),
                    status,
                    recommendations,
                });
            }
        }

        RecommendationReport {
            target: target.to_string(),
            limit: self.limit,
            target_known,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionRecord;
    use crate::rank::ScoreMap;
    use crate::strategy::fixtures::scenario_store;
    use crate::strategy::CandidateScores;

    fn items(section: &Section) -> Vec<&str> {
        section
            .recommendations
            .iter()
            .map(|r| r.item.as_str())
            .collect()
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Engine::new(scenario_store(), 0).err().unwrap();
        assert_eq!(err, RecsError::InvalidLimit { limit: 0 });
    }

    #[test]
    fn test_scenario() {
        let engine = Engine::new(scenario_store(), 5).unwrap();
        let report = engine.recommend("X");

        assert!(report.target_known);
        assert_eq!(report.sections.len(), 3);

        let popular = &report.sections[0];
        assert_eq!(popular.strategy, StrategyKind::CategoryPopularity);
        assert_eq!(popular.category.as_deref(), Some("A"));
        assert_eq!(items(popular), vec!["Y"]);

        let bought = &report.sections[1];
        assert_eq!(bought.strategy, StrategyKind::CoPurchase);
        assert_eq!(items(bought), vec!["Y", "Z"]);

        let similar = &report.sections[2];
        assert_eq!(similar.strategy, StrategyKind::Similarity);
        assert!(similar.show_scores);
        assert_eq!(items(similar), vec!["Y", "Z"]);
        for rec in &similar.recommendations {
            assert!((rec.score - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_limit_truncates_every_section() {
        let engine = Engine::new(scenario_store(), 1).unwrap();
        let report = engine.recommend("X");

        for section in &report.sections {
            assert!(section.recommendations.len() <= 1);
        }
        assert_eq!(items(&report.sections[1]), vec!["Y"]);
    }

    #[test]
    fn test_unknown_target_is_isolated_per_strategy() {
        let engine = Engine::new(scenario_store(), 5).unwrap();
        let report = engine.recommend("nope");

        assert!(!report.target_known);
        assert_eq!(
            report
                .sections_for(StrategyKind::CategoryPopularity)
                .count(),
            0
        );

        let statuses: Vec<&SectionStatus> = report.sections.iter().map(|s| &s.status).collect();
        assert_eq!(
            statuses,
            vec![&SectionStatus::TargetNotFound, &SectionStatus::TargetNotFound]
        );
        assert!(report.sections.iter().all(|s| s.recommendations.is_empty()));
    }

    #[test]
    fn test_target_in_two_categories() {
        let store = TransactionStore::from_records(vec![
            TransactionRecord::new("1", "A", "X"),
            TransactionRecord::new("1", "A", "Y"),
            TransactionRecord::new("2", "B", "X"),
            TransactionRecord::new("3", "B", "Z"),
        ]);
        let report = Engine::new(store, 5).unwrap().recommend("X");

        let popular: Vec<_> = report
            .sections_for(StrategyKind::CategoryPopularity)
            .collect();
        assert_eq!(popular.len(), 2);
        assert_eq!(items(popular[0]), vec!["Y"]);
        assert_eq!(items(popular[1]), vec!["Z"]);
    }

    struct Broken;

    impl Strategy for Broken {
        fn kind(&self) -> StrategyKind {
            StrategyKind::CoPurchase
        }

        fn score(&self, _store: &TransactionStore, _target: &str) -> Vec<CandidateScores> {
            let mut scores = ScoreMap::new();
            scores.insert("Y".to_string(), 1.0);
            vec![CandidateScores::uncategorized(scores)]
        }
    }

    #[test]
    fn test_failing_strategy_does_not_block_others() {
        let strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(Broken),
            Box::new(crate::strategy::ItemSimilarity),
        ];
        let engine = Engine::with_strategies(scenario_store(), 5, strategies).unwrap();
        let report = engine.recommend("X");

        assert_eq!(report.sections[0].status, SectionStatus::TargetNotFound);
        assert_eq!(report.sections[1].status, SectionStatus::Ranked);
        assert_eq!(items(&report.sections[1]), vec!["Y", "Z"]);
    }

    #[test]
    fn test_target_never_recommended() {
        let engine = Engine::new(scenario_store(), 10).unwrap();
        for target in ["X", "Y", "Z"] {
            let report = engine.recommend(target);
            for section in &report.sections {
                assert!(section.recommendations.iter().all(|r| r.item != target));
            }
        }
    }
}
