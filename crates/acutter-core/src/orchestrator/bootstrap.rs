//! One-time post-generation bootstrap of a freshly rendered project
//!
//! Steps run in a fixed order, each gated by a flag baked into the project when
//! it was rendered. A step whose tool is missing is skipped with a notice; any
//! other failing command aborts the whole sequence.

use crate::error::{Result, ScaffoldError};
use crate::project::{BootstrapControls, Visibility};
use crate::runtime::tool::{self, ToolManager};
use crate::runtime::{CommandRunner, CommandSpec};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default file name of the plan written by the template hook
pub const PLAN_FILE_NAME: &str = ".acutter-bootstrap.toml";

/// Message of the first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "feat: initial commit";

/// Secrets created on the remote with a placeholder value
pub const REMOTE_SECRETS: [&str; 2] = ["PYPI_TOKEN", "GH_PAT"];
pub const SECRET_PLACEHOLDER: &str = "changeme";

/// Which rendered name is used for the remote repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteName {
    #[default]
    ProjectName,
    ProjectSlug,
}

/// Values baked into a project at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapPlan {
    pub github_username: String,
    pub project_name: String,
    pub project_slug: String,
    pub package_name: String,
    #[serde(default)]
    pub project_short_description: String,
    #[serde(flatten)]
    pub controls: BootstrapControls,
    /// Also install the `docs` extra into the new virtualenv
    #[serde(default = "default_true")]
    pub install_docs_extra: bool,
    #[serde(default)]
    pub remote_name: RemoteName,
}

fn default_true() -> bool {
    true
}

impl BootstrapPlan {
    /// Load a plan file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ScaffoldError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ScaffoldError::InvalidPlan {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `owner/name` of the remote repository
    pub fn remote_repo(&self) -> String {
        let name = match self.remote_name {
            RemoteName::ProjectName => &self.project_name,
            RemoteName::ProjectSlug => &self.project_slug,
        };
        format!("{}/{}", self.github_username, name)
    }

    /// SSH URL registered as `origin`
    pub fn remote_url(&self) -> String {
        format!("git@github.com:{}.git", self.remote_repo())
    }
}

/// The bootstrap steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    PackageInit,
    Virtualenv,
    InitialCommit,
    GitHub,
    PreCommit,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapStep::PackageInit => "package init file",
            BootstrapStep::Virtualenv => "virtualenv install",
            BootstrapStep::InitialCommit => "initial commit",
            BootstrapStep::GitHub => "GitHub repository",
            BootstrapStep::PreCommit => "pre-commit hooks",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// Flag was off
    Disabled,
    /// Required tool missing
    Skipped { tool: String },
}

/// What happened to each step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub steps: Vec<(BootstrapStep, StepOutcome)>,
}

impl BootstrapReport {
    pub fn outcome(&self, step: BootstrapStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }

    pub fn completed(&self) -> Vec<BootstrapStep> {
        self.steps
            .iter()
            .filter(|(_, o)| *o == StepOutcome::Completed)
            .map(|(s, _)| *s)
            .collect()
    }
}

/// Executes a plan against a project directory
pub struct Bootstrap<'a, R: CommandRunner> {
    runner: &'a R,
    root: PathBuf,
    plan: &'a BootstrapPlan,
}

impl<'a, R: CommandRunner> Bootstrap<'a, R> {
    pub fn new(runner: &'a R, root: impl Into<PathBuf>, plan: &'a BootstrapPlan) -> Self {
        Self {
            runner,
            root: root.into(),
            plan,
        }
    }

    /// Run every enabled step in order
    pub async fn run(&self) -> Result<BootstrapReport> {
        let mut report = BootstrapReport::default();
        let controls = &self.plan.controls;

        self.ensure_package_init().await?;
        report
            .steps
            .push((BootstrapStep::PackageInit, StepOutcome::Completed));

        let gated = [
            (BootstrapStep::Virtualenv, controls.run_virtualenv_install),
            (BootstrapStep::InitialCommit, controls.initial_commit),
            (BootstrapStep::GitHub, controls.setup_github),
            (BootstrapStep::PreCommit, controls.setup_pre_commit),
        ];

        for (step, flag) in gated {
            if !flag.is_set() {
                report.steps.push((step, StepOutcome::Disabled));
                continue;
            }

            println!("  {} {}", "->".blue(), step);
            let result = match step {
                BootstrapStep::Virtualenv => self.install_virtualenv().await,
                BootstrapStep::InitialCommit => self.initial_commit().await,
                BootstrapStep::GitHub => self.setup_github().await,
                BootstrapStep::PreCommit => self.setup_pre_commit().await,
                BootstrapStep::PackageInit => Ok(()),
            };

            let outcome = match result {
                Ok(()) => StepOutcome::Completed,
                Err(ScaffoldError::ToolUnavailable(tool)) => StepOutcome::Skipped { tool },
                Err(e) => return Err(e),
            };
            report.steps.push((step, outcome));
        }

        Ok(report)
    }

    fn command(&self, program: &str) -> CommandSpec {
        CommandSpec::new(program).current_dir(&self.root)
    }

    fn venv_python(&self) -> String {
        self.root
            .join(".venv")
            .join("bin")
            .join("python")
            .to_string_lossy()
            .into_owned()
    }

    async fn require(&self, tool: &ToolManager) -> Result<()> {
        if tool.is_installed(self.runner, &self.root).await {
            Ok(())
        } else {
            tool.report_missing();
            Err(ScaffoldError::ToolUnavailable(tool.program().to_string()))
        }
    }

    async fn ensure_package_init(&self) -> Result<()> {
        let package_dir = self.root.join(&self.plan.package_name);
        let init_file = package_dir.join("__init__.py");
        if !tokio::fs::try_exists(&init_file).await? {
            tokio::fs::create_dir_all(&package_dir).await?;
            tokio::fs::write(&init_file, b"").await?;
            tracing::debug!(path = %init_file.display(), "created package init file");
        }
        Ok(())
    }

    async fn install_virtualenv(&self) -> Result<()> {
        let virtualenv = tool::virtualenv_tool();
        self.require(&virtualenv).await?;

        self.runner
            .run(&self.command(virtualenv.program()).arg(".venv"))
            .await?;

        let python = self.venv_python();
        self.runner
            .run(&self.command(&python).args(["-m", "pip", "install", "-e", ".[dev]"]))
            .await?;
        if self.plan.install_docs_extra {
            self.runner
                .run(&self.command(&python).args(["-m", "pip", "install", ".[docs]"]))
                .await?;
        }

        println!(
            "Virtualenv created inside {}\n\n\
             In case of problems, you can run (manually):\n\n    \
             cd {}\n    \
             source .venv/bin/activate\n    \
             pip install -e .[dev]\n    \
             pip install .[docs]\n",
            self.root.join(".venv").display(),
            self.root.display()
        );
        Ok(())
    }

    async fn initial_commit(&self) -> Result<()> {
        let git = tool::git_tool();
        self.require(&git).await?;

        let steps: [Vec<String>; 5] = [
            vec!["init".into()],
            vec![
                "remote".into(),
                "add".into(),
                "origin".into(),
                self.plan.remote_url(),
            ],
            vec!["add".into(), ".".into()],
            vec!["commit".into(), "-m".into(), INITIAL_COMMIT_MESSAGE.into()],
            vec!["branch".into(), "-M".into(), "main".into()],
        ];
        for args in steps {
            self.runner.run(&self.command(git.program()).args(args)).await?;
        }
        Ok(())
    }

    async fn setup_github(&self) -> Result<()> {
        let gh = tool::gh_tool();
        self.require(&gh).await?;

        let repo = self.plan.remote_repo();
        let visibility = match self.plan.controls.private_or_public {
            Visibility::Private => "--private",
            Visibility::Public => "--public",
        };
        self.runner
            .run(&self.command(gh.program()).args([
                "repo",
                "create",
                repo.as_str(),
                "-d",
                self.plan.project_short_description.as_str(),
                visibility,
                "--disable-wiki",
            ]))
            .await?;

        for secret in REMOTE_SECRETS {
            self.runner
                .run(&self.command(gh.program()).args([
                    "secret",
                    "set",
                    secret,
                    "--body",
                    SECRET_PLACEHOLDER,
                    "-R",
                    repo.as_str(),
                ]))
                .await?;
        }
        Ok(())
    }

    async fn setup_pre_commit(&self) -> Result<()> {
        let candidates = tool::pre_commit_tools(&self.root);
        match tool::first_installed(self.runner, &candidates, &self.root).await {
            Some(found) => {
                self.runner
                    .run(&self.command(found.program()).arg("install"))
                    .await
            }
            None => {
                let global = &candidates[candidates.len() - 1];
                global.report_missing();
                Err(ScaffoldError::ToolUnavailable(global.program().to_string()))
            }
        }
    }
}
