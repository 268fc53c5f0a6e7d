//! Error types shared by context extraction and command orchestration

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by every lifecycle operation
///
/// Nothing in the library retries or recovers locally; each variant is meant
/// to reach the CLI boundary unchanged.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Project configuration not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Template defaults not found: {}", .0.display())]
    TemplateDefaultsNotFound(PathBuf),

    #[error(
        "This repo already has a configuration file. Perhaps try the 'update' command? \
         Or delete {}",
        .0.display()
    )]
    AlreadyProvisioned(PathBuf),

    #[error(
        "This repo doesn't have a configuration file ({}). Perhaps try the 'provision' command?",
        .0.display()
    )]
    NotProvisioned(PathBuf),

    #[error(
        "This command has to be executed in the root directory of a project \
         (no configuration file in {})",
        .0.display()
    )]
    NotInProjectRoot(PathBuf),

    #[error(
        "Command `{command}` failed with exit code {}",
        .code.map_or_else(|| "none (killed by signal)".to_string(), |c| c.to_string())
    )]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Only ever reported for optional bootstrap steps; never aborts a sequence
    #[error("{0} command is not installed")]
    ToolUnavailable(String),

    #[error("Invalid project configuration {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid template defaults {}: {source}", path.display())]
    InvalidDefaults {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid bootstrap plan {}: {source}", path.display())]
    InvalidPlan {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
