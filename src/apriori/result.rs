use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A frequent itemset with labels in lexicographic order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    pub items: Vec<String>,
    pub support: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    /// Support ratio of antecedent ∪ consequent
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// Everything one mining run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningResult {
    /// Frequent itemsets grouped by size, smallest first
    pub frequent_itemsets: Vec<FrequentItemset>,
    /// Rules ranked by confidence
    pub rules: Vec<AssociationRule>,
    pub total_transactions: usize,
    /// Serialized as whole milliseconds
    #[serde(with = "millis")]
    pub processing_time: Duration,
}

impl MiningResult {
    /// JSON text in the camelCase shape consumers of the result expect
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Whether two results agree on everything except how long they took
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.frequent_itemsets == other.frequent_itemsets
            && self.rules == other.rules
            && self.total_transactions == other.total_transactions
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
pub(crate) fn whole_millis(duration: &Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

mod millis {
    use super::*;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(whole_millis(duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Accepts the result of each completed run
pub trait ResultSink {
    fn publish(&self, result: Arc<MiningResult>);
}

/// Single slot holding the most recently published result.
///
/// Publishing replaces the whole result at once; readers get either the
/// previous or the new result, never a mix.
#[derive(Debug, Default)]
pub struct ResultStore {
    slot: Mutex<Option<Arc<MiningResult>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, result: Arc<MiningResult>) {
        // The slot only ever holds a complete Arc, so a poisoned lock is still usable
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(result);
    }

    pub fn get(&self) -> Option<Arc<MiningResult>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

impl ResultSink for ResultStore {
    fn publish(&self, result: Arc<MiningResult>) {
        tracing::info!(
            itemsets = result.frequent_itemsets.len(),
            rules = result.rules.len(),
            "Publishing mining result"
        );
        self.set(result);
    }
}
