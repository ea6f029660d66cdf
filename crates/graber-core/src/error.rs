//! Error types for optimizer construction and runs.

use thiserror::Error;

/// Result type for configuration and construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building an optimizer.
///
/// These surface before any objective evaluation happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("momentum must be within [0, 1), got {value}")]
    InvalidMomentum { value: f64 },

    #[error("convergence window must hold at least one value, got {value}")]
    InvalidWindow { value: usize },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a single optimization run.
///
/// `E` is the evaluator's own error type. Evaluator failures are passed
/// through as-is; parameters touched earlier in the sweep stay modified.
#[derive(Debug, Error)]
pub enum OptimizeError<E> {
    #[error("an initial point is required")]
    MissingInitialPoint,

    #[error("initial point has {found} entries, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Evaluator(E),
}
