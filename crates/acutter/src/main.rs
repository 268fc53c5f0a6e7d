//! acutter CLI - provision, update and bootstrap Python package repositories

use acutter_core::tui::{Operation, RunArgs};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "acutter")]
#[command(about = "CLI for provisioning, updating and bootstrapping Python package repositories")]
#[command(version)]
pub struct Args {
    /// Template directory to render from (overrides ACUTTER_TEMPLATE_DIR)
    #[arg(long = "template-dir", global = true)]
    pub template_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a configuration file for a repository which doesn't have one
    Provision {
        /// Repository folder
        folder: PathBuf,
    },
    /// Regenerate a repository from its configuration file
    ///
    /// Files are overwritten in place; review the changes and revert those
    /// that should not be accepted.
    #[command(alias = "upgrade")]
    Update(UpdateArgs),
    /// Install the project and its extras into .venv (for development)
    Install(ProjectArgs),
    /// Re-generate documentation
    Docs {
        #[command(flatten)]
        project: ProjectArgs,

        /// Open the built documentation in the browser
        #[arg(long)]
        open: bool,
    },
    /// Run the one-time setup of a freshly generated project (used by the template hook)
    Bootstrap {
        #[command(flatten)]
        project: ProjectArgs,

        /// Bootstrap plan file (defaults to <project>/.acutter-bootstrap.toml)
        #[arg(long)]
        plan: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Repository folder containing pyproject.toml
    pub folder: PathBuf,

    /// Only print what would be passed to the renderer
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; a running renderer or tool gets the same
    // interrupt and its exit status is reported by the caller
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        if !acutter_core::runtime::child_running() {
            std::process::exit(130);
        }
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let mut yes = false;
    let operation = match args.command {
        Command::Provision { folder } => Operation::Provision { folder },
        Command::Update(update) => {
            yes = update.yes;
            Operation::Update {
                folder: update.folder,
                dry_run: update.dry_run,
            }
        }
        Command::Install(project) => Operation::Install {
            project: project.project,
        },
        Command::Docs { project, open } => Operation::Docs {
            project: project.project,
            open,
        },
        Command::Bootstrap { project, plan } => Operation::Bootstrap {
            project: project.project,
            plan,
        },
    };

    let result = acutter_core::run(RunArgs {
        operation,
        template_dir: args.template_dir,
        yes,
    })
    .await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
