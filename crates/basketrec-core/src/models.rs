//! Data types shared by the store, the strategies, and the engine.

use serde::{Deserialize, Serialize};

/// One `(order, category, item)` observation from the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TransactionRecord {
    pub order_id: String,
    pub category: String,
    pub item: String,
}

impl TransactionRecord {
    pub fn new(
        order_id: impl Into<String>,
        category: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            category: category.into(),
            item: item.into(),
        }
    }
}

/// Header names of the three columns a transaction log must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    #[serde(default = "default_order_column")]
    pub order: String,
    #[serde(default = "default_category_column")]
    pub category: String,
    #[serde(default = "default_item_column")]
    pub item: String,
}

fn default_order_column() -> String {
    "order_number".to_string()
}
fn default_category_column() -> String {
    "l2".to_string()
}
fn default_item_column() -> String {
    "l3".to_string()
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            order: default_order_column(),
            category: default_category_column(),
            item: default_item_column(),
        }
    }
}

/// A ranked candidate item and the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item: String,
    pub score: f64,
}
