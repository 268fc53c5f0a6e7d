//! Tool settings resolved from CLI flags, environment and built-in defaults

use std::path::PathBuf;

/// Environment variable overriding the template directory
pub const TEMPLATE_DIR_ENV: &str = "ACUTTER_TEMPLATE_DIR";

/// Environment variable overriding the template renderer executable
pub const RENDERER_ENV: &str = "ACUTTER_RENDERER";

/// Environment variable overriding the documentation builder executable
pub const DOCS_BUILDER_ENV: &str = "ACUTTER_DOCS_BUILDER";

/// Environment variable naming the `acutter` executable the template hook calls
pub const HOOK_PROGRAM_ENV: &str = "ACUTTER_BIN";

/// Environment variable overriding where provision's scratch output is created
pub const SCRATCH_DIR_ENV: &str = "ACUTTER_SCRATCH_DIR";

/// Template shipped with this workspace
pub const DEFAULT_TEMPLATE_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates/python_package");

pub const DEFAULT_RENDERER: &str = "cookiecutter";
pub const DEFAULT_DOCS_BUILDER: &str = "sphinx-build";

/// Name of the persisted project configuration file
pub const CONFIG_FILE_NAME: &str = "pyproject.toml";

/// Name of the template defaults file inside the template directory
pub const TEMPLATE_DEFAULTS_FILE_NAME: &str = "cookiecutter.json";

/// Everything the orchestrator needs to know about its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the cookiecutter template (contains `cookiecutter.json`)
    pub template_dir: PathBuf,
    /// Template renderer executable
    pub renderer: String,
    /// Documentation builder executable
    pub docs_builder: String,
    /// Executable exported to the template hook as `ACUTTER_BIN`
    pub hook_program: Option<PathBuf>,
    /// Parent of provision's scratch directory; `None` uses the system temp dir
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            renderer: DEFAULT_RENDERER.to_string(),
            docs_builder: DEFAULT_DOCS_BUILDER.to_string(),
            hook_program: None,
            scratch_dir: None,
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// Unless `ACUTTER_BIN` is set, the hook calls back into the running executable.
    pub fn from_env(template_dir: Option<PathBuf>) -> Self {
        let mut settings = Self::resolve(template_dir, |key| std::env::var(key).ok());
        if settings.hook_program.is_none() {
            settings.hook_program = std::env::current_exe().ok();
        }
        settings
    }

    /// Resolve settings with an explicit lookup: flag, then environment, then default
    pub fn resolve<F>(template_dir: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            template_dir: template_dir
                .or_else(|| non_empty(TEMPLATE_DIR_ENV).map(PathBuf::from))
                .unwrap_or(defaults.template_dir),
            renderer: non_empty(RENDERER_ENV).unwrap_or(defaults.renderer),
            docs_builder: non_empty(DOCS_BUILDER_ENV).unwrap_or(defaults.docs_builder),
            hook_program: non_empty(HOOK_PROGRAM_ENV).map(PathBuf::from),
            scratch_dir: non_empty(SCRATCH_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Path of the template defaults file
    pub fn template_defaults_path(&self) -> PathBuf {
        self.template_dir.join(TEMPLATE_DEFAULTS_FILE_NAME)
    }
}
