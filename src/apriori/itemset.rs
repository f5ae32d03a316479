//! Canonical itemset identity.
//!
//! An itemset is identified by its sorted, duplicate-free sequence of item
//! ids. Because the catalog numbers labels in lexicographic order, the same
//! sequence mapped back to labels is also lexicographically sorted.

/// Interned item identifier, an index into the corpus [`ItemCatalog`](super::ItemCatalog)
pub type ItemId = usize;

/// Sort and deduplicate a collection of items into its canonical form.
pub fn canonicalize<I>(items: I) -> Vec<ItemId>
where
    I: IntoIterator<Item = ItemId>,
{
    let mut items: Vec<ItemId> = items.into_iter().collect();
    items.sort_unstable();
    items.dedup();
    items
}

/// Whether every item of `subset` appears in `superset`. Both slices must be canonical.
pub fn is_subset(subset: &[ItemId], superset: &[ItemId]) -> bool {
    if subset.len() > superset.len() {
        return false;
    }

    let mut rest = superset.iter();
    'outer: for item in subset {
        for candidate in rest.by_ref() {
            if candidate == item {
                continue 'outer;
            }
            if candidate > item {
                return false;
            }
        }
        return false;
    }
    true
}

/// Merge two canonical itemsets into their canonical union.
pub fn union(a: &[ItemId], b: &[ItemId]) -> Vec<ItemId> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            merged.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            merged.push(b[j]);
            j += 1;
        } else {
            merged.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/// Items of `itemset` that do not occur in `removed`. Both slices must be canonical.
pub fn difference(itemset: &[ItemId], removed: &[ItemId]) -> Vec<ItemId> {
    itemset
        .iter()
        .copied()
        .filter(|item| removed.binary_search(item).is_err())
        .collect()
}

/// The itemset with the item at `position` removed.
pub fn without(itemset: &[ItemId], position: usize) -> Vec<ItemId> {
    let mut subset = Vec::with_capacity(itemset.len().saturating_sub(1));
    subset.extend_from_slice(&itemset[..position]);
    subset.extend_from_slice(&itemset[position + 1..]);
    subset
}
