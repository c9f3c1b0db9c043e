//! CLI error types.

use fme_config::ConfigError;
use fme_core::{ExtractError, NumberingError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    Numbering(#[from] NumberingError),

    #[error("Invalid document context: {0}")]
    Json(#[from] serde_json::Error),
}
