//! Read-only lookup tables built once over the deduplicated records.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::TransactionRecord;

/// Lookup tables over the store's records: two map a key to record
/// positions, three map a key to a set of related identifiers.
#[derive(Debug, Default)]
pub(crate) struct StoreIndex {
    /// item -> distinct orders containing it
    pub item_orders: HashMap<String, HashSet<String>>,
    /// item -> categories it is filed under, sorted
    pub item_categories: HashMap<String, BTreeSet<String>>,
    /// order -> record positions
    pub order_records: HashMap<String, Vec<usize>>,
    /// order -> distinct items
    pub order_items: HashMap<String, HashSet<String>>,
    /// category -> record positions
    pub category_records: HashMap<String, Vec<usize>>,
}

impl StoreIndex {
    pub fn build(records: &[TransactionRecord]) -> Self {
        let mut index = Self::default();

        for (pos, r) in records.iter().enumerate() {
            index
                .item_orders
                .entry(r.item.clone())
                .or_default()
                .insert(r.order_id.clone());
            index
                .item_categories
                .entry(r.item.clone())
                .or_default()
                .insert(r.category.clone());
            index
                .order_records
                .entry(r.order_id.clone())
                .or_default()
                .push(pos);
            index
                .order_items
                .entry(r.order_id.clone())
                .or_default()
                .insert(r.item.clone());
            index
                .category_records
                .entry(r.category.clone())
                .or_default()
                .push(pos);
        }

        index
    }

    pub fn category_count(&self) -> usize {
        self.category_records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_groups_by_every_key() {
        let records = vec![
            TransactionRecord::new("1", "A", "X"),
            TransactionRecord::new("1", "A", "Y"),
            TransactionRecord::new("2", "B", "X"),
        ];
        let index = StoreIndex::build(&records);

        assert_eq!(index.item_orders["X"].len(), 2);
        assert_eq!(
            index.item_categories["X"].iter().collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(index.order_records["1"], vec![0, 1]);
        assert_eq!(index.order_items["1"].len(), 2);
        assert_eq!(index.category_records["A"], vec![0, 1]);
        assert_eq!(index.category_count(), 2);
    }
}
