use super::itemset::ItemId;

/// Every non-empty proper subset of `itemset`, smallest first.
///
/// An `n`-item set yields `2^n - 2` subsets; each keeps the canonical order
/// of its parent.
pub fn proper_subsets(itemset: &[ItemId]) -> Vec<Vec<ItemId>> {
    let mut subsets = Vec::new();
    for k in 1..itemset.len() {
        let mut callback = |combination: &[ItemId]| subsets.push(combination.to_vec());
        generate_combinations_recursive(itemset, k, 0, &mut Vec::with_capacity(k), &mut callback);
    }
    subsets
}

pub fn generate_combinations_recursive<F>(
    items: &[ItemId],
    k: usize,
    start: usize,
    current: &mut Vec<ItemId>,
    callback: &mut F,
) where
    F: FnMut(&[ItemId]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
