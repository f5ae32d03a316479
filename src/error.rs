use thiserror::Error;

/// Errors that can occur while preparing or running a mining pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// The corpus holds no transactions; support ratios would divide by zero
    #[error("No transactions available for mining")]
    InsufficientData,

    /// A threshold falls outside (0, 1]
    #[error("Invalid configuration: {parameter} must be in (0, 1], got {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dense matrix columns and item labels disagree
    #[error("Shape mismatch: matrix has {actual} columns but {expected} labels were given")]
    ShapeMismatch {
        /// Number of labels
        expected: usize,
        /// Number of matrix columns
        actual: usize,
    },

    /// The transaction source failed to produce a snapshot
    #[error("Transaction source error: {0}")]
    Source(String),

    /// Mining reached a state its own invariants rule out
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, MiningError>;
