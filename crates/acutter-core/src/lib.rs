//! acutter core - provisioning and regeneration of Python package skeletons
//!
//! This library reads an existing project's configuration, derives the context
//! for the project template and drives the external tools that render and
//! bootstrap projects.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Context extraction (`project`), process
//!   execution and tool detection (`runtime`), renderer invocation (`templates`)
//! - **Layer 2: Workflow Orchestration** - `Scaffolder` and `Bootstrap` run the
//!   lifecycle steps against explicit project folders
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based flow (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use acutter_core::{Scaffolder, Settings, SystemRunner};
//!
//! let scaffolder = Scaffolder::new(SystemRunner, Settings::from_env(None));
//! scaffolder.regenerate(Path::new("../my-project"), true).await?;
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{Result, ScaffoldError};
pub use orchestrator::{
    Bootstrap, BootstrapPlan, BootstrapReport, ProvisionOutcome, RegenerateOutcome, Scaffolder,
};
pub use project::{derive_context, ContextOptions, GenerationContext};
pub use runtime::{CommandRunner, CommandSpec, SystemRunner};

#[cfg(feature = "tui")]
pub use tui::run;
