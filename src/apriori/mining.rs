use super::candidates::{join_candidates, level_one_candidates};
use super::config::MiningConfig;
use super::corpus::Corpus;
use super::itemset::ItemId;
use super::storage::FrequentLevel;
use super::support::SupportCounter;

/// Where the level-wise loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiningPhase {
    /// Singletons have not been counted yet
    Level1,
    /// Size `k` candidates are generated next
    LevelK { k: usize },
    Done,
}

/// Keep the candidates whose count reaches `min_count`.
pub fn filter_frequent(
    candidates: &[Vec<ItemId>],
    counts: &[usize],
    min_count: usize,
    itemset_size: usize,
) -> FrequentLevel {
    let mut level = FrequentLevel::with_capacity(itemset_size, candidates.len());
    for (candidate, &count) in candidates.iter().zip(counts) {
        if count >= min_count {
            level.add_itemset(candidate, count);
        }
    }
    level
}

/// Level-wise Apriori driver over one corpus snapshot.
///
/// Each [`step`](Self::step) completes one level. The loop ends when a level
/// has no survivors, or when exactly one itemset survived the previous
/// level: a lone itemset has no partner to self-join with.
pub struct LevelwiseMiner<'a> {
    counter: SupportCounter<'a>,
    min_count: usize,
    phase: MiningPhase,
    levels: Vec<FrequentLevel>,
}

impl<'a> LevelwiseMiner<'a> {
    pub fn new(corpus: &'a Corpus, config: &MiningConfig) -> Self {
        Self {
            counter: SupportCounter::new(corpus),
            min_count: config.min_count(corpus.len()),
            phase: MiningPhase::Level1,
            levels: Vec::new(),
        }
    }

    pub fn phase(&self) -> MiningPhase {
        self.phase
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    /// Advance by one level and return the new phase.
    pub fn step(&mut self) -> MiningPhase {
        self.phase = match self.phase {
            MiningPhase::Level1 => self.mine_level_one(),
            MiningPhase::LevelK { k } => self.mine_level(k),
            MiningPhase::Done => MiningPhase::Done,
        };
        self.phase
    }

    /// Run to completion, returning the frequent itemsets grouped by size.
    pub fn run(mut self) -> Vec<FrequentLevel> {
        while self.step() != MiningPhase::Done {}
        self.levels
    }

    fn mine_level_one(&mut self) -> MiningPhase {
        let (candidates, counts): (Vec<Vec<ItemId>>, Vec<usize>) =
            level_one_candidates(self.counter.corpus()).into_iter().unzip();
        let frequent = filter_frequent(&candidates, &counts, self.min_count, 1);

        tracing::debug!(
            level = 1,
            candidates = candidates.len(),
            frequent = frequent.len(),
            min_count = self.min_count,
            "Counted singleton candidates"
        );

        self.accept(frequent, 2)
    }

    fn mine_level(&mut self, k: usize) -> MiningPhase {
        let Some(previous) = self.levels.last() else {
            return MiningPhase::Done;
        };
        if previous.len() == 1 {
            tracing::debug!(level = k, "Single frequent itemset left, stopping");
            return MiningPhase::Done;
        }

        let candidates = join_candidates(previous, k);
        let counts = self.counter.count_all(&candidates);
        let frequent = filter_frequent(&candidates, &counts, self.min_count, k);

        tracing::debug!(
            level = k,
            candidates = candidates.len(),
            frequent = frequent.len(),
            "Counted joined candidates"
        );

        self.accept(frequent, k + 1)
    }

    fn accept(&mut self, frequent: FrequentLevel, next_k: usize) -> MiningPhase {
        if frequent.is_empty() {
            return MiningPhase::Done;
        }
        self.levels.push(frequent);
        MiningPhase::LevelK { k: next_k }
    }
}

/// Frequent itemsets of every size for `corpus` under `config`.
pub fn mine_frequent_itemsets(corpus: &Corpus, config: &MiningConfig) -> Vec<FrequentLevel> {
    LevelwiseMiner::new(corpus, config).run()
}
