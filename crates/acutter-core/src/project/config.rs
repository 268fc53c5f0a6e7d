//! Project configuration and template defaults types and parsing

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An entry of `project.authors`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An entry of `project.packages`
///
/// Older generated projects wrote `{ include = "pkg" }` tables; newer ones write
/// the bare package name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    Name(String),
    Include { include: String },
}

/// `project.license`, either `{ text = "..." }` or a bare string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum License {
    Text(String),
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

impl License {
    pub fn text(&self) -> Option<&str> {
        match self {
            License::Text(text) => Some(text),
            License::Table { text } => text.as_deref(),
        }
    }
}

/// The `[project]` table of a generated project's `pyproject.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<PackageEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PyProject {
    project: ProjectConfig,
}

impl ProjectConfig {
    /// Load the `[project]` table from a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ScaffoldError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|message| ScaffoldError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse the `[project]` table out of TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str::<PyProject>(content)
            .map(|doc| doc.project)
            .map_err(|e| e.to_string())
    }

    /// First author, if the list is non-empty
    pub fn first_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Repository URL, treating an empty string as absent
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// Values from the template's `cookiecutter.json` used as fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefaults {
    pub email: String,
    pub full_name: String,
    pub version: String,
    pub project_short_description: String,
}

impl TemplateDefaults {
    /// Load defaults from a template directory
    pub fn load(template_dir: &Path) -> Result<Self> {
        let path = template_dir.join(crate::config::TEMPLATE_DEFAULTS_FILE_NAME);
        if !path.is_file() {
            return Err(ScaffoldError::TemplateDefaultsNotFound(path));
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| ScaffoldError::InvalidDefaults {
            path,
            source,
        })
    }
}
