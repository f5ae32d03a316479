use std::collections::HashSet;

use super::itemset::ItemId;

/// Flat storage for itemsets and their support counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsetStorage {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    /// Append an already canonical itemset. Returns its index.
    pub fn add_itemset(&mut self, items: &[ItemId], support: usize) -> usize {
        debug_assert!(items.windows(2).all(|pair| pair[0] < pair[1]));

        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn with_capacity(itemset_size: usize, estimated_itemsets: usize) -> Self {
        let estimated_items = estimated_itemsets * itemset_size;
        Self {
            storage: ItemsetStorage::with_capacity(estimated_items, estimated_itemsets),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[ItemId], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their support counts
    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_support(idx)))
    }

    /// Membership index over this level's itemsets, borrowed from the storage.
    pub fn lookup(&self) -> HashSet<&[ItemId]> {
        self.iter_itemsets().collect()
    }
}
