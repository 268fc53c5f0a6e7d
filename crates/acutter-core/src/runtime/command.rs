//! External process invocation
//!
//! Every collaborator (renderer, docs builder, git, gh, pip, pre-commit) is run
//! through a `CommandRunner`, so orchestration can be exercised without
//! spawning anything.

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::process::Command as TokioCommand;

static FOREGROUND_CHILDREN: AtomicUsize = AtomicUsize::new(0);

/// Whether a child started by `SystemRunner` is currently running
///
/// A terminal interrupt reaches the whole foreground process group, so while
/// this is true the child is the one expected to react to it.
pub fn child_running() -> bool {
    FOREGROUND_CHILDREN.load(Ordering::SeqCst) > 0
}

/// Marks a child as running until dropped
struct ForegroundChild;

impl ForegroundChild {
    fn enter() -> Self {
        FOREGROUND_CHILDREN.fetch_add(1, Ordering::SeqCst);
        ForegroundChild
    }
}

impl Drop for ForegroundChild {
    fn drop(&mut self) {
        FOREGROUND_CHILDREN.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A fully described command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the parent's
    pub cwd: Option<PathBuf>,
    /// Extra environment on top of the inherited one
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    fn to_tokio(&self) -> TokioCommand {
        let mut cmd = TokioCommand::new(&self.program);
        cmd.args(&self.args);
        cmd.envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands one at a time
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run to completion with inherited stdio; non-zero exit is an error
    async fn run(&self, command: &CommandSpec) -> Result<()>;

    /// Run with output discarded; `false` if it cannot be spawned or exits non-zero
    async fn probe(&self, command: &CommandSpec) -> bool;
}

/// Runner backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        tracing::debug!(command = %command, cwd = ?command.cwd, "running command");

        let _child = ForegroundChild::enter();
        let status = command
            .to_tokio()
            .status()
            .await
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!(command = %command, code = ?status.code(), "command failed");
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }

    async fn probe(&self, command: &CommandSpec) -> bool {
        let _child = ForegroundChild::enter();
        let available = command
            .to_tokio()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false);

        tracing::debug!(command = %command, available, "probed command");
        available
    }
}
