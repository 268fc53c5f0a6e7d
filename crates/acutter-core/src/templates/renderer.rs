//! Template rendering through the cookiecutter CLI

use crate::config::HOOK_PROGRAM_ENV;
use crate::error::Result;
use crate::runtime::{CommandRunner, CommandSpec};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Everything the renderer is invoked with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    pub template_dir: PathBuf,
    pub no_input: bool,
    #[serde(serialize_with = "serialize_pairs")]
    pub extra_context: Vec<(String, String)>,
    pub overwrite_if_exists: bool,
    pub output_dir: PathBuf,
}

fn serialize_pairs<S: Serializer>(
    pairs: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl RenderRequest {
    /// Look up an extra-context value
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.extra_context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The cookiecutter executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookiecutter {
    program: String,
    hook_program: Option<PathBuf>,
}

impl Cookiecutter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            hook_program: None,
        }
    }

    /// Executable the template's post-generation hook calls back into
    pub fn with_hook_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.hook_program = Some(program.into());
        self
    }

    /// Build the command line for a request
    pub fn command(&self, request: &RenderRequest) -> CommandSpec {
        let mut cmd = CommandSpec::new(self.program.as_str())
            .arg("--output-dir")
            .path_arg(&request.output_dir);
        if request.no_input {
            cmd = cmd.arg("--no-input");
        }
        if request.overwrite_if_exists {
            cmd = cmd.arg("--overwrite-if-exists");
        }
        cmd = cmd.path_arg(&request.template_dir);
        for (key, value) in &request.extra_context {
            cmd = cmd.arg(format!("{}={}", key, value));
        }
        if let Some(program) = &self.hook_program {
            cmd = cmd.env(HOOK_PROGRAM_ENV, program.to_string_lossy());
        }
        cmd
    }

    /// Render the template, blocking until the renderer exits
    pub async fn render<R: CommandRunner>(&self, runner: &R, request: &RenderRequest) -> Result<()> {
        runner.run(&self.command(request)).await
    }
}
