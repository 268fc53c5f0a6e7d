//! Template rendering
//!
//! The renderer itself is an external tool; this module only describes how it
//! is invoked.

pub mod renderer;

pub use renderer::{Cookiecutter, RenderRequest};
