use std::collections::{BTreeSet, HashMap};

use ndarray::ArrayView2;

use super::itemset::{canonicalize, is_subset, ItemId};
use crate::error::{MiningError, Result};

/// Distinct item labels of a corpus, numbered in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    labels: Vec<String>,
    ids: HashMap<String, ItemId>,
}

impl ItemCatalog {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        let labels: Vec<String> = sorted.into_iter().collect();
        let ids = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();
        Self { labels, ids }
    }

    pub fn id(&self, label: &str) -> Option<ItemId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: ItemId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Canonical key for a collection of labels, or `None` if any label is unknown.
    pub fn canonical_key<S: AsRef<str>>(&self, labels: &[S]) -> Option<Vec<ItemId>> {
        let ids = labels
            .iter()
            .map(|label| self.id(label.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        Some(canonicalize(ids))
    }

    /// Map canonical ids back to their labels, preserving order.
    pub fn resolve(&self, itemset: &[ItemId]) -> Vec<String> {
        itemset
            .iter()
            .filter_map(|&id| self.label(id).map(str::to_owned))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Immutable snapshot of the transactions a mining run reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    catalog: ItemCatalog,
    transactions: Vec<Vec<ItemId>>,
}

impl Corpus {
    /// Build a corpus from label lists. Duplicate labels inside one
    /// transaction collapse to a single occurrence.
    pub fn from_transactions<T, I, S>(transactions: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<Vec<String>> = transactions
            .into_iter()
            .map(|tx| tx.into_iter().map(|item| item.as_ref().to_owned()).collect())
            .collect();

        let catalog = ItemCatalog::from_labels(raw.iter().flatten().cloned());
        let transactions = raw
            .iter()
            .map(|tx| canonicalize(tx.iter().filter_map(|label| catalog.id(label))))
            .collect();

        Self {
            catalog,
            transactions,
        }
    }

    /// Build a corpus from a binary matrix: one row per transaction, one
    /// column per item, any non-zero cell marks the item as present.
    pub fn from_dense<S: AsRef<str>>(matrix: ArrayView2<i32>, labels: &[S]) -> Result<Self> {
        let num_items = matrix.shape()[1];
        if labels.len() != num_items {
            return Err(MiningError::ShapeMismatch {
                expected: labels.len(),
                actual: num_items,
            });
        }

        // Columns that never fire still belong to the catalog
        let catalog = ItemCatalog::from_labels(labels.iter().map(|label| label.as_ref().to_owned()));
        let column_ids: Vec<Option<ItemId>> = labels
            .iter()
            .map(|label| catalog.id(label.as_ref()))
            .collect();

        let transactions = matrix
            .rows()
            .into_iter()
            .map(|row| {
                canonicalize(
                    row.iter()
                        .zip(&column_ids)
                        .filter(|&(&cell, _)| cell != 0)
                        .filter_map(|(_, &id)| id),
                )
            })
            .collect();

        Ok(Self {
            catalog,
            transactions,
        })
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn transactions(&self) -> &[Vec<ItemId>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of transactions containing every given label. Unknown labels
    /// occur in no transaction.
    pub fn support_count<S: AsRef<str>>(&self, labels: &[S]) -> usize {
        match self.catalog.canonical_key(labels) {
            Some(key) => self
                .transactions
                .iter()
                .filter(|tx| is_subset(&key, tx))
                .count(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_catalog_orders_labels() {
        let catalog = ItemCatalog::from_labels(["milk", "bread", "eggs", "bread"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id("bread"), Some(0));
        assert_eq!(catalog.id("eggs"), Some(1));
        assert_eq!(catalog.id("milk"), Some(2));
        assert_eq!(catalog.id("Milk"), None);
        assert_eq!(catalog.label(1), Some("eggs"));
        assert_eq!(catalog.label(3), None);
        assert_eq!(catalog.resolve(&[0, 2]), vec!["bread", "milk"]);
    }

    #[test]
    fn test_canonical_key_ignores_order_and_duplicates() {
        let catalog = ItemCatalog::from_labels(["a", "b", "c"]);
        assert_eq!(catalog.canonical_key(&["c", "a"]), catalog.canonical_key(&["a", "c", "a"]));
        assert_ne!(catalog.canonical_key(&["a", "b"]), catalog.canonical_key(&["a", "c"]));
        assert_eq!(catalog.canonical_key(&["a", "z"]), None);
    }

    #[test]
    fn test_duplicates_within_transaction_collapse() {
        let corpus = Corpus::from_transactions(vec![vec!["milk", "milk", "bread"], vec!["milk"]]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.transactions()[0].len(), 2);
        assert_eq!(corpus.support_count(&["milk"]), 2);
        assert_eq!(corpus.support_count(&["bread", "milk"]), 1);
        assert_eq!(corpus.support_count(&["eggs"]), 0);
    }

    #[test]
    fn test_from_dense() {
        let matrix = Array2::from_shape_vec(
            (3, 3),
            vec![
                1, 1, 0, // tea, coffee
                0, 1, 0, // coffee
                1, 0, 0, // tea
            ],
        )
        .unwrap();
        let corpus = Corpus::from_dense(matrix.view(), &["tea", "coffee", "sugar"]).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.catalog().len(), 3);
        assert_eq!(corpus.support_count(&["tea"]), 2);
        assert_eq!(corpus.support_count(&["coffee", "tea"]), 1);
        assert_eq!(corpus.support_count(&["sugar"]), 0);
    }

    #[test]
    fn test_from_dense_rejects_label_mismatch() {
        let matrix = Array2::<i32>::zeros((2, 3));
        let err = Corpus::from_dense(matrix.view(), &["a", "b"]).unwrap_err();
        assert_eq!(err, MiningError::ShapeMismatch { expected: 2, actual: 3 });
    }
}
