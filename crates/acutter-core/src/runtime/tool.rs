//! Availability checks for the optional tools used by bootstrap steps
//!
//! A tool counts as available when `<tool> -h` runs and exits zero. A missing
//! executable and a failing help invocation are treated the same way.

use super::command::{CommandRunner, CommandSpec};
use colored::Colorize;
use std::path::Path;

/// Configuration for an optional CLI tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Executable name or absolute path
    pub program: String,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// How to get the tool, shown when it is missing
    pub install_hint: &'static str,
}

/// Manager for checking a single tool
#[derive(Debug, Clone)]
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn program(&self) -> &str {
        &self.config.program
    }

    /// Command used to detect the tool
    pub fn probe_command(&self, cwd: &Path) -> CommandSpec {
        CommandSpec::new(self.config.program.as_str())
            .arg("-h")
            .current_dir(cwd)
    }

    /// Check if the tool can be invoked from `cwd`
    pub async fn is_installed<R: CommandRunner>(&self, runner: &R, cwd: &Path) -> bool {
        runner.probe(&self.probe_command(cwd)).await
    }

    /// Print the standard "not installed" notice
    pub fn report_missing(&self) {
        println!(
            "{} {} command is not installed ({}: {})",
            "Skipping:".yellow(),
            self.config.program,
            self.config.display_name,
            self.config.install_hint.dimmed()
        );
        tracing::info!(tool = %self.config.program, "tool unavailable, step skipped");
    }
}

/// Return the first tool in `candidates` that is installed
pub async fn first_installed<'a, R: CommandRunner>(
    runner: &R,
    candidates: &'a [ToolManager],
    cwd: &Path,
) -> Option<&'a ToolManager> {
    for tool in candidates {
        if tool.is_installed(runner, cwd).await {
            return Some(tool);
        }
    }
    None
}

/// Pre-configured tool manager for virtualenv
pub fn virtualenv_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        program: "virtualenv".to_string(),
        display_name: "virtualenv",
        install_hint: "pip install virtualenv",
    })
}

/// Pre-configured tool manager for git
pub fn git_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        program: "git".to_string(),
        display_name: "git",
        install_hint: "https://git-scm.com/downloads",
    })
}

/// Pre-configured tool manager for the GitHub CLI
pub fn gh_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        program: "gh".to_string(),
        display_name: "GitHub CLI",
        install_hint: "https://cli.github.com",
    })
}

/// Hook runners in order of preference: the project's virtualenv, then global
pub fn pre_commit_tools(project_root: &Path) -> Vec<ToolManager> {
    let local = project_root.join(".venv").join("bin").join("pre-commit");
    vec![
        ToolManager::new(ToolConfig {
            program: local.to_string_lossy().into_owned(),
            display_name: "pre-commit (.venv)",
            install_hint: "pip install pre-commit",
        }),
        ToolManager::new(ToolConfig {
            program: "pre-commit".to_string(),
            display_name: "pre-commit",
            install_hint: "pip install pre-commit",
        }),
    ]
}
