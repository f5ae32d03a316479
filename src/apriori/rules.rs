use std::cmp::Ordering;

use rayon::prelude::*;

use super::combinations::proper_subsets;
use super::itemset::{difference, ItemId};
use super::storage::FrequentLevel;
use super::support::SupportCounter;
use crate::error::{MiningError, Result};

/// An association rule over item ids, before labels are attached
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRule {
    pub antecedent: Vec<ItemId>,
    pub consequent: Vec<ItemId>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// Derive and rank the rules of every frequent itemset with two or more items.
///
/// Antecedent and consequent supports are recounted against the corpus, since
/// neither side has to be present in `levels`. Rules below `min_confidence`
/// are dropped. The output is sorted by [`rank_rules`].
pub fn generate_rules(
    counter: &SupportCounter<'_>,
    levels: &[FrequentLevel],
    min_confidence: f64,
) -> Result<Vec<ScoredRule>> {
    let total = counter.total_transactions();
    if total == 0 {
        return Err(MiningError::InsufficientData);
    }

    let itemsets: Vec<(&[ItemId], usize)> = levels
        .iter()
        .flat_map(|level| level.iter_with_support())
        .filter(|(items, _)| items.len() >= 2)
        .collect();

    let per_itemset: Vec<Vec<ScoredRule>> = itemsets
        .par_iter()
        .map(|&(items, count)| {
            rules_for_itemset(counter, items, count as f64 / total as f64, min_confidence)
        })
        .collect::<Result<_>>()?;

    let mut rules: Vec<ScoredRule> = per_itemset.into_iter().flatten().collect();
    rank_rules(&mut rules);
    Ok(rules)
}

fn rules_for_itemset(
    counter: &SupportCounter<'_>,
    itemset: &[ItemId],
    support: f64,
    min_confidence: f64,
) -> Result<Vec<ScoredRule>> {
    let mut rules = Vec::new();

    for antecedent in proper_subsets(itemset) {
        let consequent = difference(itemset, &antecedent);

        let antecedent_support = nonzero_support(counter, &antecedent, "antecedent")?;
        let confidence = support / antecedent_support;
        if confidence < min_confidence {
            continue;
        }

        let consequent_support = nonzero_support(counter, &consequent, "consequent")?;
        rules.push(ScoredRule {
            antecedent,
            consequent,
            support,
            confidence,
            lift: confidence / consequent_support,
        });
    }

    Ok(rules)
}

fn nonzero_support(counter: &SupportCounter<'_>, side: &[ItemId], role: &str) -> Result<f64> {
    let ratio = counter.ratio(side);
    if ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(MiningError::InvariantViolation(format!(
            "{role} {side:?} has zero support inside a frequent itemset"
        )))
    }
}

/// Confidence descending, then lift descending, then antecedent and
/// consequent ascending. Item ids share the label order, so the last two
/// keys are lexicographic over labels.
pub fn rank_rules(rules: &mut [ScoredRule]) {
    rules.sort_by(compare_rules);
}

fn compare_rules(a: &ScoredRule, b: &ScoredRule) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.lift.total_cmp(&a.lift))
        .then_with(|| a.antecedent.cmp(&b.antecedent))
        .then_with(|| a.consequent.cmp(&b.consequent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::corpus::Corpus;
    use crate::apriori::mining::mine_frequent_itemsets;
    use crate::apriori::MiningConfig;

    fn rule(antecedent: Vec<ItemId>, confidence: f64, lift: f64) -> ScoredRule {
        ScoredRule {
            antecedent,
            consequent: vec![9],
            support: 0.5,
            confidence,
            lift,
        }
    }

    #[test]
    fn test_rank_rules_tie_breaks() {
        let mut rules = vec![
            rule(vec![3], 0.8, 1.0),
            rule(vec![2], 0.9, 1.0),
            rule(vec![1], 0.8, 1.0),
            rule(vec![0], 0.8, 1.5),
        ];
        rank_rules(&mut rules);
        let order: Vec<_> = rules.iter().map(|r| r.antecedent[0]).collect();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_rules_respect_min_confidence() {
        // a appears in every transaction, b in half of them
        let corpus = Corpus::from_transactions(vec![
            vec!["a", "b"],
            vec!["a", "b"],
            vec!["a"],
            vec!["a"],
        ]);
        let config = MiningConfig::new(0.5, 0.9).unwrap();
        let levels = mine_frequent_itemsets(&corpus, &config);
        let counter = SupportCounter::new(&corpus);

        let rules = generate_rules(&counter, &levels, config.min_confidence).unwrap();
        // b -> a has confidence 1.0, a -> b only 0.5
        assert_eq!(rules.len(), 1);
        let b = corpus.catalog().id("b").unwrap();
        let a = corpus.catalog().id("a").unwrap();
        assert_eq!(rules[0].antecedent, vec![b]);
        assert_eq!(rules[0].consequent, vec![a]);
        assert_eq!(rules[0].confidence, 1.0);
        assert_eq!(rules[0].lift, 1.0);
        assert_eq!(rules[0].support, 0.5);
    }

    #[test]
    fn test_singletons_produce_no_rules() {
        let corpus = Corpus::from_transactions(vec![vec!["a"], vec!["a"]]);
        let config = MiningConfig::new(0.5, 0.1).unwrap();
        let levels = mine_frequent_itemsets(&corpus, &config);
        let rules = generate_rules(&SupportCounter::new(&corpus), &levels, 0.1).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_zero_support_antecedent_is_an_invariant_violation() {
        // A level claiming {0,5} is frequent although item 5 never occurs
        let corpus = Corpus::from_transactions(vec![vec!["a", "b"]]);
        let mut level = FrequentLevel::new(2);
        level.add_itemset(&[0, 5], 1);

        let result = generate_rules(&SupportCounter::new(&corpus), &[level], 0.1);
        assert!(matches!(result, Err(MiningError::InvariantViolation(_))));
    }
}
