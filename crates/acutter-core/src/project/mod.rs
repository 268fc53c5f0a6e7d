//! Context extraction from an existing project
//!
//! This module provides:
//! - The `[project]` table and template defaults types
//! - Derivation of the `GenerationContext` handed to the renderer

pub mod config;
pub mod context;

pub use config::{Author, License, PackageEntry, ProjectConfig, TemplateDefaults};
pub use context::{
    derive_context, slugify, BootstrapControls, ContextOptions, Flag, GenerationContext,
    Visibility,
};
