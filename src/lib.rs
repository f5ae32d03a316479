//! Apriori mining of frequent itemsets and association rules.
//!
//! ```
//! use basketminer::{mine, Corpus, MiningConfig};
//!
//! let corpus = Corpus::from_transactions(vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread", "eggs"],
//!     vec!["bread", "eggs"],
//! ]);
//! let config = MiningConfig::new(0.6, 0.6)?;
//! let result = mine(&corpus, &config)?;
//!
//! assert_eq!(result.total_transactions, 3);
//! assert!(result.rules.iter().all(|rule| rule.confidence >= 0.6));
//! # Ok::<(), basketminer::MiningError>(())
//! ```

pub mod apriori;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use apriori::{
    mine, mine_and_publish, AssociationRule, Corpus, FrequentItemset, MiningConfig, MiningResult,
    ResultSink, ResultStore, TransactionSource,
};
pub use error::{MiningError, Result};
