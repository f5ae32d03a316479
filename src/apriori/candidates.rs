use std::collections::{BTreeSet, HashSet};

use super::corpus::Corpus;
use super::itemset::{union, without, ItemId};
use super::storage::FrequentLevel;
use super::support::SupportCounter;

/// Singleton candidates for every item that occurs in the corpus, with their
/// occurrence counts, ordered by item id.
pub fn level_one_candidates(corpus: &Corpus) -> Vec<(Vec<ItemId>, usize)> {
    let mut counts: Vec<(ItemId, usize)> = SupportCounter::new(corpus)
        .item_counts()
        .into_iter()
        .collect();
    counts.sort_unstable_by_key(|&(item, _)| item);
    counts
        .into_iter()
        .map(|(item, count)| (vec![item], count))
        .collect()
}

/// Self-join the size `k - 1` frequent itemsets into size `k` candidates.
///
/// Every unordered pair whose union has exactly `k` items yields a candidate;
/// unions reached from several pairs appear once. Candidates with a size
/// `k - 1` subset that is not frequent are dropped before counting. The
/// result is in canonical order.
pub fn join_candidates(previous: &FrequentLevel, k: usize) -> Vec<Vec<ItemId>> {
    let frequent = previous.lookup();
    let itemsets: Vec<&[ItemId]> = previous.iter_itemsets().collect();
    let mut joined: BTreeSet<Vec<ItemId>> = BTreeSet::new();

    for (i, left) in itemsets.iter().enumerate() {
        for right in &itemsets[i + 1..] {
            let candidate = union(left, right);
            if candidate.len() != k || joined.contains(&candidate) {
                continue;
            }
            if has_frequent_subsets(&candidate, &frequent) {
                joined.insert(candidate);
            }
        }
    }

    joined.into_iter().collect()
}

/// Whether every subset obtained by dropping one item is in `frequent`.
/// Singletons always pass.
pub fn has_frequent_subsets(candidate: &[ItemId], frequent: &HashSet<&[ItemId]>) -> bool {
    if candidate.len() <= 1 {
        return true;
    }

    (0..candidate.len()).all(|position| frequent.contains(without(candidate, position).as_slice()))
}
