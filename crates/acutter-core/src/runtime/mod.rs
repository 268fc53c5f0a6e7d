//! Process execution and tool detection
//!
//! This module provides:
//! - `CommandRunner`, the seam for every external process
//! - Optional tool detection for bootstrap steps

pub mod command;
pub mod tool;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{child_running, CommandRunner, CommandSpec, SystemRunner};
pub use tool::{first_installed, ToolConfig, ToolManager};
