pub mod candidates;
pub mod combinations;
pub mod config;
pub mod corpus;
pub mod itemset;
pub mod mining;
pub mod result;
pub mod rules;
pub mod service;
pub mod storage;
pub mod support;


pub use candidates::{has_frequent_subsets, join_candidates, level_one_candidates};
pub use config::MiningConfig;
pub use corpus::{Corpus, ItemCatalog};
pub use itemset::{canonicalize, ItemId};
pub use mining::{filter_frequent, mine_frequent_itemsets, LevelwiseMiner, MiningPhase};
pub use result::{AssociationRule, FrequentItemset, MiningResult, ResultSink, ResultStore};
pub use rules::{generate_rules, rank_rules, ScoredRule};
pub use service::{mine, mine_and_publish, TransactionSource};
pub use storage::{FrequentLevel, ItemsetStorage};
pub use support::SupportCounter;
