//! Configuration for the tool itself (not the generated projects)

pub mod settings;

pub use settings::{Settings, CONFIG_FILE_NAME, HOOK_PROGRAM_ENV, TEMPLATE_DEFAULTS_FILE_NAME};
