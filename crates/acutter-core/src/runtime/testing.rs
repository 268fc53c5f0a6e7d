//! In-memory `CommandRunner` for tests

use super::command::{CommandRunner, CommandSpec};
use crate::error::{Result, ScaffoldError};
use std::collections::HashSet;
use std::sync::Mutex;

type SideEffect = Box<dyn Fn(&CommandSpec)>;

/// Records every invocation instead of spawning processes
#[derive(Default)]
pub struct RecordingRunner {
    runs: Mutex<Vec<CommandSpec>>,
    probes: Mutex<Vec<CommandSpec>>,
    missing: HashSet<String>,
    failing: Vec<String>,
    on_run: Option<SideEffect>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `program` as not installed
    pub fn missing(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    /// Fail (exit code 1) any command whose display form starts with `prefix`
    pub fn failing(mut self, prefix: impl Into<String>) -> Self {
        self.failing.push(prefix.into());
        self
    }

    /// Execute `effect` for every successful `run`
    pub fn on_run(mut self, effect: impl Fn(&CommandSpec) + 'static) -> Self {
        self.on_run = Some(Box::new(effect));
        self
    }

    pub fn runs(&self) -> Vec<CommandSpec> {
        self.runs.lock().unwrap().clone()
    }

    pub fn probes(&self) -> Vec<CommandSpec> {
        self.probes.lock().unwrap().clone()
    }

    /// Display strings of every `run`, in order
    pub fn run_lines(&self) -> Vec<String> {
        self.runs().iter().map(ToString::to_string).collect()
    }

    pub fn total_invocations(&self) -> usize {
        self.runs.lock().unwrap().len() + self.probes.lock().unwrap().len()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        self.runs.lock().unwrap().push(command.clone());

        if self.missing.contains(&command.program) {
            return Err(ScaffoldError::CommandSpawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        let line = command.to_string();
        if self.failing.iter().any(|prefix| line.starts_with(prefix)) {
            return Err(ScaffoldError::CommandFailed {
                command: line,
                code: Some(1),
            });
        }
        if let Some(effect) = &self.on_run {
            effect(command);
        }
        Ok(())
    }

    async fn probe(&self, command: &CommandSpec) -> bool {
        self.probes.lock().unwrap().push(command.clone());
        let line = command.to_string();
        !self.missing.contains(&command.program)
            && !self.failing.iter().any(|prefix| line.starts_with(prefix))
    }
}
