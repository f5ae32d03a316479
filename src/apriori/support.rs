use std::collections::HashMap;

use rayon::prelude::*;

use super::corpus::Corpus;
use super::itemset::{is_subset, ItemId};

/// Counts how many corpus transactions contain a given itemset
#[derive(Debug, Clone, Copy)]
pub struct SupportCounter<'a> {
    corpus: &'a Corpus,
}

impl<'a> SupportCounter<'a> {
    /// The corpus must be non-empty for [`ratio`](Self::ratio) to be meaningful.
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    pub fn total_transactions(&self) -> usize {
        self.corpus.len()
    }

    /// Number of transactions that are supersets of `itemset` (canonical form).
    pub fn count(&self, itemset: &[ItemId]) -> usize {
        self.corpus
            .transactions()
            .iter()
            .filter(|tx| is_subset(itemset, tx))
            .count()
    }

    pub fn ratio(&self, itemset: &[ItemId]) -> f64 {
        self.count(itemset) as f64 / self.total_transactions() as f64
    }

    /// Count every candidate with one corpus scan per candidate, in parallel.
    /// The output is aligned with `candidates`.
    pub fn count_all(&self, candidates: &[Vec<ItemId>]) -> Vec<usize> {
        candidates
            .par_iter()
            .map(|candidate| self.count(candidate))
            .collect()
    }

    /// Occurrence count of every distinct item in a single pass.
    pub fn item_counts(&self) -> HashMap<ItemId, usize> {
        let mut item_counts: HashMap<ItemId, usize> = HashMap::new();
        for transaction in self.corpus.transactions() {
            for &item in transaction {
                *item_counts.entry(item).or_insert(0) += 1;
            }
        }
        item_counts
    }
}
