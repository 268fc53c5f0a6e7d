//! Charm-style CLI flow using cliclack

use crate::config::Settings;
use crate::orchestrator::{
    provisioned_config, BootstrapPlan, BootstrapReport, ProvisionOutcome, RegenerateOutcome,
    Scaffolder, StepOutcome, PLAN_FILE_NAME,
};
use crate::runtime::SystemRunner;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The lifecycle step requested on the command line
#[derive(Debug, Clone)]
pub enum Operation {
    Provision { folder: PathBuf },
    Update { folder: PathBuf, dry_run: bool },
    Install { project: PathBuf },
    Docs { project: PathBuf, open: bool },
    Bootstrap { project: PathBuf, plan: Option<PathBuf> },
}

/// CLI arguments shared by every operation
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub operation: Operation,

    /// Template directory override
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run one operation with inline progress output
pub async fn run(args: RunArgs) -> Result<()> {
    cliclack::intro("acutter")?;

    let settings = Settings::from_env(args.template_dir.clone());
    tracing::debug!(?settings, "resolved settings");
    let scaffolder = Scaffolder::new(SystemRunner, settings);

    match args.operation {
        Operation::Provision { folder } => provision(&scaffolder, &folder).await?,
        Operation::Update { folder, dry_run } => {
            update(&scaffolder, &folder, dry_run, args.yes).await?
        }
        Operation::Install { project } => {
            let project = absolute(&project)?;
            cliclack::log::info(format!("Installing {} into .venv", project.display()))?;
            scaffolder.install(&project).await?;
            cliclack::log::success("Development install complete")?;
        }
        Operation::Docs { project, open } => {
            let project = absolute(&project)?;
            scaffolder.build_docs(&project, open).await?;
        }
        Operation::Bootstrap { project, plan } => {
            let project = absolute(&project)?;
            let plan_path = plan.unwrap_or_else(|| project.join(PLAN_FILE_NAME));
            let plan = BootstrapPlan::load(&plan_path)?;
            cliclack::log::info(format!("Bootstrapping {}", project.display()))?;
            let report = scaffolder.bootstrap(&project, &plan).await?;
            print_report(&report)?;
        }
    }

    cliclack::outro("Done!")?;
    Ok(())
}

async fn provision(scaffolder: &Scaffolder<SystemRunner>, folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("Directory does not exist: {}", folder.display());
    }

    match scaffolder.provision(folder).await? {
        ProvisionOutcome::Provisioned { config_path } => {
            cliclack::log::success(format!("Configuration written to {}", config_path.display()))?;
            cliclack::log::info("You can now run the 'update' command")?;
        }
        ProvisionOutcome::Interrupted { output_dir } => {
            cliclack::log::warning(format!(
                "No configuration generated; renderer output left in {}",
                output_dir.display()
            ))?;
        }
    }
    Ok(())
}

async fn update(
    scaffolder: &Scaffolder<SystemRunner>,
    folder: &Path,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    if !folder.is_dir() {
        anyhow::bail!("Directory does not exist: {}", folder.display());
    }
    provisioned_config(folder)?;

    if !dry_run {
        cliclack::log::warning(format!(
            "Files in {} will be overwritten. Review the changes afterwards and revert \
             those that should not be accepted (git checkout -- <path>)",
            folder.display()
        ))?;

        // Auto-confirm with --yes flag
        let confirm = if yes {
            true
        } else {
            cliclack::confirm("Continue?").initial_value(true).interact()?
        };
        if !confirm {
            anyhow::bail!("Update cancelled.");
        }
    }

    match scaffolder.regenerate(folder, dry_run).await? {
        RegenerateOutcome::DryRun(_) => cliclack::log::info("Dry run: nothing was changed")?,
        RegenerateOutcome::Rendered(request) => cliclack::log::success(format!(
            "Project regenerated into {}",
            request.output_dir.display()
        ))?,
    }
    Ok(())
}

fn print_report(report: &BootstrapReport) -> Result<()> {
    for (step, outcome) in &report.steps {
        match outcome {
            StepOutcome::Completed => cliclack::log::success(format!("{}", step))?,
            StepOutcome::Disabled => cliclack::log::remark(format!("{} (not requested)", step))?,
            StepOutcome::Skipped { tool } => {
                cliclack::log::warning(format!("{} skipped: {} is not installed", step, tool))?
            }
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    Ok(current_dir.join(path))
}
