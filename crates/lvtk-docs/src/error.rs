//! CLI error types.

use lvtk_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("module not found: {0}")]
    ModuleNotFound(String),

    #[error("page table check failed: {0}")]
    Check(String),
}
