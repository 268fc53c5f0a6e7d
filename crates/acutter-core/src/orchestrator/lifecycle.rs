//! Provision, regenerate, install and docs operations

use super::bootstrap::{Bootstrap, BootstrapPlan, BootstrapReport};
use crate::config::{Settings, CONFIG_FILE_NAME};
use crate::error::{Result, ScaffoldError};
use crate::project::{
    BootstrapControls, ContextOptions, GenerationContext, ProjectConfig, TemplateDefaults,
};
use crate::runtime::{CommandRunner, CommandSpec};
use crate::templates::{Cookiecutter, RenderRequest};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of `Scaffolder::provision`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The rendered configuration was copied into the project
    Provisioned { config_path: PathBuf },
    /// The renderer produced no configuration; its output is left for inspection
    Interrupted { output_dir: PathBuf },
}

/// Result of `Scaffolder::regenerate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenerateOutcome {
    Rendered(RenderRequest),
    DryRun(RenderRequest),
}

impl RegenerateOutcome {
    pub fn request(&self) -> &RenderRequest {
        match self {
            RegenerateOutcome::Rendered(r) | RegenerateOutcome::DryRun(r) => r,
        }
    }
}

/// Runs lifecycle steps against explicit project folders
pub struct Scaffolder<R: CommandRunner> {
    runner: R,
    settings: Settings,
    options: ContextOptions,
}

impl<R: CommandRunner> Scaffolder<R> {
    pub fn new(runner: R, settings: Settings) -> Self {
        Self {
            runner,
            settings,
            options: ContextOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn renderer(&self) -> Cookiecutter {
        let renderer = Cookiecutter::new(self.settings.renderer.as_str());
        match &self.settings.hook_program {
            Some(program) => renderer.with_hook_program(program.clone()),
            None => renderer,
        }
    }

    /// Generate a configuration file for a repository that has none
    ///
    /// The template is rendered interactively into a temporary directory and
    /// only the configuration file is copied back; the repository itself is
    /// left untouched.
    pub async fn provision(&self, folder: &Path) -> Result<ProvisionOutcome> {
        let config_path = folder.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Err(ScaffoldError::AlreadyProvisioned(config_path));
        }

        let folder = tokio::fs::canonicalize(folder).await?;
        let project_name = folder_name(&folder)?;

        println!(
            "{}",
            "First, we'll generate a new project from the template - please answer these questions \
             (do not worry, the original repository will be unchanged)"
                .cyan()
        );

        let mut builder = tempfile::Builder::new();
        builder.prefix("acutter-");
        let scratch = match &self.settings.scratch_dir {
            Some(dir) => builder.tempdir_in(dir)?,
            None => builder.tempdir()?,
        };
        let mut extra_context = controls_context(&BootstrapControls::inert());
        extra_context.push(("project_name".to_string(), project_name));

        let request = RenderRequest {
            template_dir: self.settings.template_dir.clone(),
            no_input: false,
            extra_context,
            overwrite_if_exists: true,
            output_dir: scratch.path().to_path_buf(),
        };

        match self.renderer().render(&self.runner, &request).await {
            Ok(()) => {}
            // Operator abort: treated like "nothing rendered"
            Err(ScaffoldError::CommandFailed { command, code }) => {
                tracing::debug!(%command, ?code, "renderer exited unsuccessfully");
            }
            Err(e) => return Err(e),
        }

        match find_rendered_config(scratch.path()) {
            Some(rendered) => {
                tokio::fs::copy(&rendered, &config_path).await?;
                println!(
                    "{} {}",
                    "New config written into:".green().bold(),
                    config_path.display()
                );
                Ok(ProvisionOutcome::Provisioned { config_path })
            }
            None => {
                let output_dir = scratch.keep();
                println!(
                    "{}",
                    "Process interrupted; no configuration generated".yellow()
                );
                println!("{}", output_dir.display());
                Ok(ProvisionOutcome::Interrupted { output_dir })
            }
        }
    }

    /// Re-render an existing project in place from its own configuration
    ///
    /// With `dry_run` nothing is written and no process is started; the render
    /// parameters are printed instead.
    pub async fn regenerate(&self, folder: &Path, dry_run: bool) -> Result<RegenerateOutcome> {
        let config_path = provisioned_config(folder)?;

        let config = ProjectConfig::load(&config_path)?;
        let defaults = TemplateDefaults::load(&self.settings.template_dir)?;

        print_yaml(
            &format!("Settings loaded from: {}", config_path.display()),
            &config,
        );
        print_yaml("Current template defaults:", &defaults);

        let mut context = GenerationContext::derive(&config, &defaults, &self.options);

        let folder = tokio::fs::canonicalize(folder).await?;
        let basename = folder_name(&folder)?;
        reconcile_project_name(&mut context, &basename);

        print_yaml("And this is what we'll use:", &context);

        let output_dir = folder
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| folder.clone());

        let request = RenderRequest {
            template_dir: self.settings.template_dir.clone(),
            no_input: true,
            extra_context: context
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            overwrite_if_exists: true,
            output_dir,
        };

        if dry_run {
            print_yaml("Would have called the renderer with:", &request);
            return Ok(RegenerateOutcome::DryRun(request));
        }

        self.renderer().render(&self.runner, &request).await?;
        println!(
            "{} {} - review the changes with git before committing",
            "Regenerated".green().bold(),
            folder.display()
        );
        Ok(RegenerateOutcome::Rendered(request))
    }

    /// Build the documentation of the project at `project_root`
    pub async fn build_docs(&self, project_root: &Path, open_browser: bool) -> Result<()> {
        ensure_project_root(project_root)?;

        let cmd = CommandSpec::new(self.settings.docs_builder.as_str())
            .args(["docs", ".docs"])
            .current_dir(project_root);
        self.runner.run(&cmd).await?;

        let index = project_root.join(".docs").join("index.html");
        println!("{} {}", "Documentation built:".green().bold(), index.display());

        if open_browser {
            println!("{}", "Opening documentation in your browser...".cyan());
            open::that(&index)?;
        }
        Ok(())
    }

    /// Install the project and its extras into `.venv`
    pub async fn install(&self, project_root: &Path) -> Result<()> {
        ensure_project_root(project_root)?;

        let python = project_root
            .join(".venv")
            .join("bin")
            .join("python")
            .to_string_lossy()
            .into_owned();

        for target in [".[dev]", ".[docs]", "."] {
            let cmd = CommandSpec::new(python.as_str())
                .args(["-m", "pip", "install", "-e", target])
                .current_dir(project_root);
            self.runner.run(&cmd).await?;
        }
        Ok(())
    }

    /// Run the post-generation bootstrap for a freshly rendered project
    pub async fn bootstrap(
        &self,
        project_root: &Path,
        plan: &BootstrapPlan,
    ) -> Result<BootstrapReport> {
        Bootstrap::new(&self.runner, project_root, plan).run().await
    }
}

/// Path of the folder's configuration file; `NotProvisioned` if it has none
pub fn provisioned_config(folder: &Path) -> Result<PathBuf> {
    let config_path = folder.join(CONFIG_FILE_NAME);
    if config_path.is_file() {
        Ok(config_path)
    } else {
        Err(ScaffoldError::NotProvisioned(config_path))
    }
}

fn controls_context(controls: &BootstrapControls) -> Vec<(String, String)> {
    controls
        .entries()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The folder's name on disk wins over the configured project name
fn reconcile_project_name(context: &mut GenerationContext, basename: &str) {
    match context.project_name.as_deref() {
        Some(name) if name == basename => {}
        Some(name) => {
            println!(
                "{} project_name differs from the location on disk; will use location: {} -> {}",
                "Note:".yellow(),
                name,
                basename
            );
            tracing::info!(configured = name, on_disk = basename, "project_name overridden");
            context.project_name = Some(basename.to_string());
        }
        None => {
            tracing::info!(on_disk = basename, "project_name taken from location on disk");
            context.project_name = Some(basename.to_string());
        }
    }
}

fn ensure_project_root(project_root: &Path) -> Result<()> {
    if project_root.join(CONFIG_FILE_NAME).is_file() {
        Ok(())
    } else {
        Err(ScaffoldError::NotInProjectRoot(project_root.to_path_buf()))
    }
}

fn folder_name(folder: &Path) -> Result<String> {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            ScaffoldError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no directory name", folder.display()),
            ))
        })
}

/// Locate the configuration file the renderer wrote under `output_dir`
fn find_rendered_config(output_dir: &Path) -> Option<PathBuf> {
    WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == CONFIG_FILE_NAME)
        .map(|entry| entry.into_path())
}

fn print_yaml<T: Serialize>(title: &str, value: &T) {
    println!("{}", title.cyan().bold());
    match serde_yaml::to_string(value) {
        Ok(yaml) => {
            for line in yaml.lines() {
                println!("  {}", line);
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not render summary"),
    }
    println!("{}", "-".repeat(80).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::testing::RecordingRunner;
    use crate::runtime::SystemRunner;
    use std::fs;

    const DEFAULTS_JSON: &str = r#"{
        "full_name": "D",
        "email": "d@x.com",
        "version": "0.0.0",
        "project_short_description": "desc"
    }"#;

    struct Fixture {
        _root: tempfile::TempDir,
        template: PathBuf,
        workspace: PathBuf,
    }

    fn fixture() -> Fixture {
        let root = tempfile::tempdir().unwrap();
        let template = root.path().join("template");
        fs::create_dir(&template).unwrap();
        fs::write(template.join("cookiecutter.json"), DEFAULTS_JSON).unwrap();
        let workspace = root.path().join("work");
        fs::create_dir(&workspace).unwrap();
        Fixture {
            template,
            workspace: fs::canonicalize(&workspace).unwrap(),
            _root: root,
        }
    }

    fn settings(fx: &Fixture) -> Settings {
        Settings {
            template_dir: fx.template.clone(),
            ..Settings::default()
        }
    }

    fn project(fx: &Fixture, name: &str, config: &str) -> PathBuf {
        let dir = fx.workspace.join(name);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE_NAME), config).unwrap();
        dir
    }

    fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files: Vec<_> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| (e.path().to_path_buf(), fs::read(e.path()).unwrap()))
            .collect();
        files.sort();
        files
    }

    fn scratch_settings(fx: &Fixture, scratch: &Path) -> Settings {
        Settings {
            scratch_dir: Some(scratch.to_path_buf()),
            ..settings(fx)
        }
    }

    fn entries(dir: &Path) -> Vec<PathBuf> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        entries
    }

    #[tokio::test]
    async fn test_provision_already_provisioned() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scratch = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(
            RecordingRunner::new(),
            scratch_settings(&fx, scratch.path()),
        );

        let err = scaffolder.provision(&dir).await.unwrap_err();

        assert!(matches!(err, ScaffoldError::AlreadyProvisioned(_)));
        assert_eq!(scaffolder.runner().total_invocations(), 0);
        assert!(entries(scratch.path()).is_empty());
    }

    #[tokio::test]
    async fn test_provision_uses_configured_scratch_dir() {
        let fx = fixture();
        let dir = fx.workspace.join("widget");
        fs::create_dir(&dir).unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(
            RecordingRunner::new().failing("cookiecutter"),
            scratch_settings(&fx, scratch.path()),
        );

        let outcome = scaffolder.provision(&dir).await.unwrap();

        match outcome {
            ProvisionOutcome::Interrupted { output_dir } => {
                assert_eq!(entries(scratch.path()), vec![output_dir.clone()]);
                let name = output_dir.file_name().unwrap().to_string_lossy().into_owned();
                assert!(name.starts_with("acutter-"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_provision_renderer_ended_by_interrupt_reports_output() {
        use std::os::unix::fs::PermissionsExt;

        let fx = fixture();
        let dir = fx.workspace.join("widget");
        fs::create_dir(&dir).unwrap();
        let bin = tempfile::tempdir().unwrap();
        let renderer = bin.path().join("renderer");
        fs::write(&renderer, "#!/bin/sh\nkill -INT $$\nexit 1\n").unwrap();
        fs::set_permissions(&renderer, fs::Permissions::from_mode(0o755)).unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(
            SystemRunner,
            Settings {
                renderer: renderer.to_string_lossy().into_owned(),
                ..scratch_settings(&fx, scratch.path())
            },
        );

        let outcome = scaffolder.provision(&dir).await.unwrap();

        match outcome {
            ProvisionOutcome::Interrupted { output_dir } => {
                assert!(output_dir.is_dir());
                assert!(output_dir.starts_with(scratch.path()));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!dir.join(CONFIG_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_renderer_receives_hook_program() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scaffolder = Scaffolder::new(
            RecordingRunner::new(),
            Settings {
                hook_program: Some(PathBuf::from("/opt/acutter/bin/acutter")),
                ..settings(&fx)
            },
        );

        scaffolder.regenerate(&dir, false).await.unwrap();

        let runs = scaffolder.runner().runs();
        assert_eq!(
            runs[0].envs,
            vec![(
                "ACUTTER_BIN".to_string(),
                "/opt/acutter/bin/acutter".to_string()
            )]
        );
    }

    #[test]
    fn test_provisioned_config() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        assert_eq!(provisioned_config(&dir).unwrap(), dir.join(CONFIG_FILE_NAME));

        let err = provisioned_config(&fx.workspace).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotProvisioned(_)));
    }

    #[tokio::test]
    async fn test_provision_copies_rendered_config() {
        let fx = fixture();
        let dir = fx.workspace.join("widget");
        fs::create_dir(&dir).unwrap();

        let runner = RecordingRunner::new().on_run(|cmd| {
            let out = PathBuf::from(&cmd.args[1]);
            let generated = out.join("widget");
            fs::create_dir_all(&generated).unwrap();
            fs::write(generated.join(CONFIG_FILE_NAME), "[project]\nname = \"widget\"\n").unwrap();
        });
        let scaffolder = Scaffolder::new(runner, settings(&fx));

        let outcome = scaffolder.provision(&dir).await.unwrap();

        let config_path = dir.join(CONFIG_FILE_NAME);
        assert_eq!(
            outcome,
            ProvisionOutcome::Provisioned {
                config_path: config_path.clone()
            }
        );
        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            "[project]\nname = \"widget\"\n"
        );

        let runs = scaffolder.runner().runs();
        assert_eq!(runs.len(), 1);
        let args = &runs[0].args;
        assert!(!args.iter().any(|a| a == "--no-input"));
        assert!(args.iter().any(|a| a == "--overwrite-if-exists"));
        assert!(args.iter().any(|a| a == "project_name=widget"));
        assert!(args.iter().any(|a| a == "initial_commit=n"));
        assert!(args.iter().any(|a| a == "private_or_public=private"));
        assert!(!PathBuf::from(&args[1]).exists());
    }

    #[tokio::test]
    async fn test_provision_interrupted_keeps_output() {
        let fx = fixture();
        let dir = fx.workspace.join("widget");
        fs::create_dir(&dir).unwrap();
        let scaffolder = Scaffolder::new(
            RecordingRunner::new().failing("cookiecutter"),
            settings(&fx),
        );

        let outcome = scaffolder.provision(&dir).await.unwrap();

        match outcome {
            ProvisionOutcome::Interrupted { output_dir } => {
                assert!(output_dir.is_dir());
                fs::remove_dir_all(output_dir).unwrap();
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!dir.join(CONFIG_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_provision_missing_renderer_is_an_error() {
        let fx = fixture();
        let dir = fx.workspace.join("widget");
        fs::create_dir(&dir).unwrap();
        let scaffolder = Scaffolder::new(
            RecordingRunner::new().missing("cookiecutter"),
            settings(&fx),
        );

        let err = scaffolder.provision(&dir).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandSpawn { .. }));
    }

    #[tokio::test]
    async fn test_regenerate_not_provisioned() {
        let fx = fixture();
        let dir = fx.workspace.join("empty");
        fs::create_dir(&dir).unwrap();
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let err = scaffolder.regenerate(&dir, false).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::NotProvisioned(_)));
    }

    #[tokio::test]
    async fn test_regenerate_missing_template_defaults() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scaffolder = Scaffolder::new(
            RecordingRunner::new(),
            Settings {
                template_dir: fx.workspace.join("nowhere"),
                ..Settings::default()
            },
        );

        let err = scaffolder.regenerate(&dir, false).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateDefaultsNotFound(_)));
    }

    #[tokio::test]
    async fn test_regenerate_renders_into_parent() {
        let fx = fixture();
        let dir = project(
            &fx,
            "widget",
            "[project]\nrepository = \"git@github.com:alice/widget.git\"\nversion = \"1.2.0\"\n",
        );
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let outcome = scaffolder.regenerate(&dir, false).await.unwrap();

        let request = outcome.request();
        assert!(matches!(outcome, RegenerateOutcome::Rendered(_)));
        assert_eq!(request.output_dir, fx.workspace);
        assert!(request.no_input);
        assert!(request.overwrite_if_exists);
        assert_eq!(request.context_value("github_username"), Some("alice"));
        assert_eq!(request.context_value("version"), Some("1.2.0"));

        let runs = scaffolder.runner().runs();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].args.iter().any(|a| a == "--no-input"));
        assert!(runs[0].args.iter().any(|a| a == "project_slug=widget"));
    }

    #[tokio::test]
    async fn test_regenerate_folder_name_wins() {
        let fx = fixture();
        let dir = project(
            &fx,
            "gadget",
            "[project]\nrepository = \"git@github.com:alice/widget.git\"\n",
        );
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let outcome = scaffolder.regenerate(&dir, true).await.unwrap();

        let request = outcome.request();
        assert_eq!(request.context_value("project_name"), Some("gadget"));
        // package name was derived before the override
        assert_eq!(request.context_value("package_name"), Some("widget"));
    }

    #[tokio::test]
    async fn test_regenerate_without_repository_uses_folder_name() {
        let fx = fixture();
        let dir = project(&fx, "gadget", "[project]\nversion = \"2.0.0\"\n");
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let outcome = scaffolder.regenerate(&dir, true).await.unwrap();

        let request = outcome.request();
        assert_eq!(request.context_value("project_name"), Some("gadget"));
        assert_eq!(request.context_value("github_username"), None);
    }

    #[tokio::test]
    async fn test_regenerate_ignores_legacy_packages_when_disabled() {
        let fx = fixture();
        let dir = project(
            &fx,
            "widget",
            "[project]\nrepository = \"https://github.com/alice/widget\"\n\
             packages = [{ include = \"legacy_pkg\" }]\n",
        );
        let options = ContextOptions {
            accept_legacy_packages: false,
            ..ContextOptions::default()
        };
        let scaffolder =
            Scaffolder::new(RecordingRunner::new(), settings(&fx)).with_options(options);

        let outcome = scaffolder.regenerate(&dir, true).await.unwrap();

        assert_eq!(outcome.request().context_value("package_name"), Some("widget"));
    }

    #[tokio::test]
    async fn test_dry_run_has_no_side_effects() {
        let fx = fixture();
        let dir = project(
            &fx,
            "widget",
            "[project]\nrepository = \"git@github.com:alice/widget.git\"\n",
        );
        let before = snapshot(&fx.workspace);
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let outcome = scaffolder.regenerate(&dir, true).await.unwrap();

        assert!(matches!(outcome, RegenerateOutcome::DryRun(_)));
        assert_eq!(scaffolder.runner().total_invocations(), 0);
        assert_eq!(snapshot(&fx.workspace), before);
    }

    #[tokio::test]
    async fn test_docs_requires_project_root() {
        let fx = fixture();
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let err = scaffolder.build_docs(&fx.workspace, false).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::NotInProjectRoot(_)));
        assert_eq!(scaffolder.runner().total_invocations(), 0);
    }

    #[tokio::test]
    async fn test_docs_runs_builder_in_project() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        scaffolder.build_docs(&dir, false).await.unwrap();

        let runs = scaffolder.runner().runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].to_string(), "sphinx-build docs .docs");
        assert_eq!(runs[0].cwd.as_deref(), Some(dir.as_path()));
    }

    #[tokio::test]
    async fn test_docs_failure_is_surfaced() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scaffolder = Scaffolder::new(
            RecordingRunner::new().failing("sphinx-build"),
            settings(&fx),
        );

        let err = scaffolder.build_docs(&dir, false).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_install_runs_pip_three_times() {
        let fx = fixture();
        let dir = project(&fx, "widget", "[project]\n");
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        scaffolder.install(&dir).await.unwrap();

        let python = dir.join(".venv/bin/python");
        let python = python.to_string_lossy();
        assert_eq!(
            scaffolder.runner().run_lines(),
            vec![
                format!("{} -m pip install -e .[dev]", python),
                format!("{} -m pip install -e .[docs]", python),
                format!("{} -m pip install -e .", python),
            ]
        );
    }

    #[tokio::test]
    async fn test_install_requires_project_root() {
        let fx = fixture();
        let scaffolder = Scaffolder::new(RecordingRunner::new(), settings(&fx));

        let err = scaffolder.install(&fx.workspace).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::NotInProjectRoot(_)));
    }
}
