//! The deduplicated, immutable transaction store.
//!
//! A [`TransactionStore`] is built once, either from a header row plus raw
//! delimited rows ([`TransactionStore::load`]) or from already-projected
//! records ([`TransactionStore::from_records`]). Construction drops exact
//! duplicate records, keeping the first occurrence, and builds the lookup
//! tables every strategy reads from. Nothing mutates the store afterwards.

mod index;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{RecsError, Result};
use crate::models::{ColumnMap, TransactionRecord};

use index::StoreIndex;

/// Counts reported after a store is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Data rows seen, excluding the header.
    pub rows_read: usize,
    /// Rows skipped because a required cell was missing or blank.
    pub rejected_rows: usize,
    /// Exact duplicate records dropped.
    pub duplicates_removed: usize,
    /// Records kept.
    pub records: usize,
    pub orders: usize,
    pub items: usize,
    pub categories: usize,
}

/// Immutable collection of unique transaction records plus lookup indices.
#[derive(Debug)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
    index: StoreIndex,
    summary: LoadSummary,
}

/// Column positions resolved from a header row.
struct ColumnPositions {
    order: usize,
    category: usize,
    item: usize,
}

impl ColumnPositions {
    fn resolve<H: AsRef<str>>(headers: &[H], columns: &ColumnMap) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.as_ref().trim() == name);

        let order = find(columns.order.as_str());
        let category = find(columns.category.as_str());
        let item = find(columns.item.as_str());

        match (order, category, item) {
            (Some(order), Some(category), Some(item)) => Ok(Self {
                order,
                category,
                item,
            }),
            _ => {
                let missing = [
                    (order, &columns.order),
                    (category, &columns.category),
                    (item, &columns.item),
                ]
                .into_iter()
                .filter(|(pos, _)| pos.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                Err(RecsError::DataFormat { missing })
            }
        }
    }

    fn project<F: AsRef<str>>(&self, row: &[F]) -> Option<TransactionRecord> {
        let cell = |pos: usize| {
            row.get(pos)
                .map(|v| v.as_ref())
                .filter(|v| !v.trim().is_empty())
        };
        Some(TransactionRecord::new(
            cell(self.order)?,
            cell(self.category)?,
            cell(self.item)?,
        ))
    }
}

impl TransactionStore {
    /// Build a store from a header row and raw rows.
    ///
    /// Only the three columns named by `columns` are kept; any other
    /// columns are ignored. Fails with [`RecsError::DataFormat`] if a
    /// required column is missing from `headers`. Rows with a missing or
    /// blank required cell are skipped and counted as rejected.
    pub fn load<H, I, R, F>(headers: &[H], rows: I, columns: &ColumnMap) -> Result<Self>
    where
        H: AsRef<str>,
        I: IntoIterator<Item = R>,
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let positions = ColumnPositions::resolve(headers, columns)?;

        let mut rows_read = 0;
        let mut rejected_rows = 0;
        let mut records = Vec::new();
        for row in rows {
            rows_read += 1;
            match positions.project(row.as_ref()) {
                Some(record) => records.push(record),
                None => {
                    rejected_rows += 1;
                    tracing::warn!(row = rows_read, "skipping row with a missing required cell");
                }
            }
        }

        let mut store = Self::from_records(records);
        store.summary.rows_read = rows_read;
        store.summary.rejected_rows = rejected_rows;
        Ok(store)
    }

    /// Build a store from projected records, dropping exact duplicates.
    pub fn from_records<I: IntoIterator<Item = TransactionRecord>>(records: I) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut rows_read = 0;
        for record in records {
            rows_read += 1;
            if seen.insert(record.clone()) {
                kept.push(record);
            }
        }

        let index = StoreIndex::build(&kept);
        let summary = LoadSummary {
            rows_read,
            rejected_rows: 0,
            duplicates_removed: rows_read - kept.len(),
            records: kept.len(),
            orders: index.order_records.len(),
            items: index.item_orders.len(),
            categories: index.category_count(),
        };

        tracing::debug!(
            records = summary.records,
            duplicates = summary.duplicates_removed,
            "built transaction store"
        );

        Self {
            records: kept,
            index,
            summary,
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    /// Whether `item` appears in at least one record.
    pub fn contains_item(&self, item: &str) -> bool {
        self.index.item_orders.contains_key(item)
    }

    /// Categories `item` is filed under, in ascending order.
    pub fn categories_of<'a>(&'a self, item: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .item_categories
            .get(item)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn records_in_category<'a>(
        &'a self,
        category: &str,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.positions(self.index.category_records.get(category))
    }

    pub fn records_in_order<'a>(
        &'a self,
        order_id: &str,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.positions(self.index.order_records.get(order_id))
    }

    /// Distinct orders containing `item`, or `None` if the item is unknown.
    pub fn orders_of(&self, item: &str) -> Option<&HashSet<String>> {
        self.index.item_orders.get(item)
    }

    /// Distinct items bought in `order_id`.
    pub fn items_in_order(&self, order_id: &str) -> Option<&HashSet<String>> {
        self.index.order_items.get(order_id)
    }

    /// Every distinct item paired with its set of orders.
    pub fn item_orders(&self) -> &HashMap<String, HashSet<String>> {
        &self.index.item_orders
    }

    /// Distinct items with the number of orders containing each, most
    /// frequent first and ties broken by item identifier.
    pub fn items_by_order_count(&self) -> Vec<(String, usize)> {
        let mut items: Vec<(String, usize)> = self
            .index
            .item_orders
            .iter()
            .map(|(item, orders)| (item.clone(), orders.len()))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    fn positions<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        positions
            .into_iter()
            .flatten()
            .map(move |&pos| &self.records[pos])
    }
}
