use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for POC Assistant operations
pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum PocError {
    #[error("Refusing to overwrite {0} without confirmation (use --yes)")]
    WouldOverwrite(PathBuf),

    #[error("Plan file is not a valid POC export: {0}")]
    InvalidPlan(String),

    #[error("Config file is invalid: {0}")]
    InvalidConfig(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("No interactive terminal available: {0}")]
    NotATerminal(String),
}
