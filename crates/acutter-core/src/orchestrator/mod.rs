//! Command orchestration for each lifecycle step
//!
//! This module provides:
//! - `Scaffolder`: provision, regenerate (with dry run), install and docs
//! - `Bootstrap`: the one-time post-generation sequence

pub mod bootstrap;
pub mod lifecycle;

pub use bootstrap::{
    Bootstrap, BootstrapPlan, BootstrapReport, BootstrapStep, RemoteName, StepOutcome,
    PLAN_FILE_NAME,
};
pub use lifecycle::{provisioned_config, ProvisionOutcome, RegenerateOutcome, Scaffolder};
