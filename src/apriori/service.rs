use std::sync::Arc;
use std::time::Instant;

use super::config::MiningConfig;
use super::corpus::Corpus;
use super::mining::mine_frequent_itemsets;
use super::result::{whole_millis, AssociationRule, FrequentItemset, MiningResult, ResultSink};
use super::rules::generate_rules;
use super::support::SupportCounter;
use crate::error::{MiningError, Result};

/// Supplies the transaction snapshot a run mines
pub trait TransactionSource {
    fn snapshot(&self) -> Result<Corpus>;
}

impl TransactionSource for Corpus {
    fn snapshot(&self) -> Result<Corpus> {
        Ok(self.clone())
    }
}

impl<F> TransactionSource for F
where
    F: Fn() -> Result<Corpus>,
{
    fn snapshot(&self) -> Result<Corpus> {
        self()
    }
}

/// Mine frequent itemsets and ranked association rules from `corpus`.
///
/// Fails with [`MiningError::InsufficientData`] on an empty corpus and with
/// [`MiningError::InvalidConfiguration`] on thresholds outside (0, 1].
pub fn mine(corpus: &Corpus, config: &MiningConfig) -> Result<MiningResult> {
    let started = Instant::now();
    config.validate()?;
    if corpus.is_empty() {
        return Err(MiningError::InsufficientData);
    }

    let total = corpus.len();
    let levels = mine_frequent_itemsets(corpus, config);
    let counter = SupportCounter::new(corpus);
    let scored = generate_rules(&counter, &levels, config.min_confidence)?;

    let catalog = corpus.catalog();
    let frequent_itemsets: Vec<FrequentItemset> = levels
        .iter()
        .flat_map(|level| level.iter_with_support())
        .map(|(items, count)| FrequentItemset {
            items: catalog.resolve(items),
            support: count as f64 / total as f64,
            count,
        })
        .collect();

    let rules: Vec<AssociationRule> = scored
        .into_iter()
        .map(|rule| AssociationRule {
            antecedent: catalog.resolve(&rule.antecedent),
            consequent: catalog.resolve(&rule.consequent),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        })
        .collect();

    let processing_time = started.elapsed();
    tracing::info!(
        transactions = total,
        itemsets = frequent_itemsets.len(),
        rules = rules.len(),
        elapsed_ms = whole_millis(&processing_time),
        "Mining run completed"
    );

    Ok(MiningResult {
        frequent_itemsets,
        rules,
        total_transactions: total,
        processing_time,
    })
}

/// Take a snapshot from `source`, mine it, and hand the result to `sink`.
///
/// The reported processing time includes taking the snapshot. Nothing is
/// published when any step fails.
pub fn mine_and_publish<S, K>(source: &S, config: &MiningConfig, sink: &K) -> Result<Arc<MiningResult>>
where
    S: TransactionSource + ?Sized,
    K: ResultSink + ?Sized,
{
    let started = Instant::now();
    config.validate()?;

    let corpus = source.snapshot()?;
    if corpus.is_empty() {
        tracing::warn!("No transactions available for mining");
        return Err(MiningError::InsufficientData);
    }

    let mut result = mine(&corpus, config)?;
    result.processing_time = started.elapsed();

    let result = Arc::new(result);
    sink.publish(Arc::clone(&result));
    Ok(result)
}
