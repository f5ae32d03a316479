use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};

/// Thresholds for one mining run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in, in (0, 1]
    pub min_support: f64,

    /// Minimum confidence a rule must reach, in (0, 1]
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.2,
            min_confidence: 0.5,
        }
    }
}

impl MiningConfig {
    /// Create a validated configuration
    pub fn new(min_support: f64, min_confidence: f64) -> Result<Self> {
        let config = Self {
            min_support,
            min_confidence,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object such as `{"minSupport": 0.4, "minConfidence": 0.6}`
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| MiningError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both thresholds lie in (0, 1]
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("minSupport", self.min_support)?;
        check_unit_interval("minConfidence", self.min_confidence)?;
        Ok(())
    }

    /// Smallest support count that still counts as frequent for a corpus of
    /// `total_transactions` transactions.
    ///
    /// The product can miss a whole count by a rounding step (`0.7 * 10.0` is
    /// `7.000000000000001`), so the ceiling is corrected by one in either
    /// direction using the same `count / total` ratio reported supports use.
    pub fn min_count(&self, total_transactions: usize) -> usize {
        let total = total_transactions as f64;
        let mut count = (self.min_support * total).ceil();
        if count > 1.0 && (count - 1.0) / total >= self.min_support {
            count -= 1.0;
        } else if count / total < self.min_support {
            count += 1.0;
        }
        count.max(1.0) as usize
    }
}

fn check_unit_interval(parameter: &'static str, value: f64) -> Result<()> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidConfiguration { parameter, value })
    }
}
