//! Derivation of the template context from an existing project
//!
//! The context is a pure function of the project's `[project]` table and the
//! template defaults. The bootstrap controls are never read from the project:
//! regenerating must not re-initialise git, recreate the remote or reinstall
//! hooks.

use crate::error::Result;
use crate::project::config::{PackageEntry, ProjectConfig, TemplateDefaults};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// License text used when the project declares none
pub const NOT_OPEN_SOURCE: &str = "Not open source";

/// A cookiecutter yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "y",
            Flag::No => "n",
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl TryFrom<String> for Flag {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Ok(Flag::Yes),
            "n" | "no" | "false" | "0" => Ok(Flag::No),
            other => Err(format!("expected 'y' or 'n', got '{}'", other)),
        }
    }
}

impl From<Flag> for String {
    fn from(flag: Flag) -> Self {
        flag.as_str().to_string()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of the remote repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five context keys controlling post-generation bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapControls {
    pub initial_commit: Flag,
    pub setup_github: Flag,
    pub setup_pre_commit: Flag,
    pub private_or_public: Visibility,
    pub run_virtualenv_install: Flag,
}

impl BootstrapControls {
    /// Controls that make the template's bootstrap a no-op
    pub fn inert() -> Self {
        Self {
            initial_commit: Flag::No,
            setup_github: Flag::No,
            setup_pre_commit: Flag::No,
            private_or_public: Visibility::Private,
            run_virtualenv_install: Flag::No,
        }
    }

    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("initial_commit", self.initial_commit.as_str()),
            ("setup_github", self.setup_github.as_str()),
            ("setup_pre_commit", self.setup_pre_commit.as_str()),
            ("private_or_public", self.private_or_public.as_str()),
            ("run_virtualenv_install", self.run_virtualenv_install.as_str()),
        ]
    }
}

/// Knobs for the places where older generated projects differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    /// Unwrap `{ include = "pkg" }` entries of `project.packages`
    pub accept_legacy_packages: bool,
    /// Separator used when slugifying the project name into a package name
    pub slug_separator: char,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            accept_legacy_packages: true,
            slug_separator: '-',
        }
    }
}

/// The mapping passed to the template renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub controls: BootstrapControls,
    pub email: String,
    pub full_name: String,
    pub github_username: Option<String>,
    pub project_name: Option<String>,
    package_name: Option<String>,
    pub open_source_license: String,
    pub version: String,
    pub project_short_description: String,
}

impl GenerationContext {
    /// Derive the context from already-loaded inputs
    pub fn derive(
        config: &ProjectConfig,
        defaults: &TemplateDefaults,
        options: &ContextOptions,
    ) -> Self {
        let author = config.first_author();
        let email = author
            .and_then(|a| a.email.clone())
            .unwrap_or_else(|| defaults.email.clone());
        let full_name = author
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| defaults.full_name.clone());

        let (github_username, project_name) = match config.repository() {
            Some(repo) => split_repository(repo),
            None => (None, None),
        };

        let package_name = first_package(config, options).or_else(|| {
            project_name
                .as_deref()
                .map(|name| slugify(name, options.slug_separator))
                .filter(|slug| !slug.is_empty())
        });

        let open_source_license = match &config.license {
            Some(license) => license.text().unwrap_or(NOT_OPEN_SOURCE).to_string(),
            None => NOT_OPEN_SOURCE.to_string(),
        };

        Self {
            controls: BootstrapControls::inert(),
            email,
            full_name,
            github_username,
            project_name,
            package_name,
            open_source_license,
            version: config
                .version
                .clone()
                .unwrap_or_else(|| defaults.version.clone()),
            project_short_description: config
                .description
                .clone()
                .unwrap_or_else(|| defaults.project_short_description.clone()),
        }
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Always equal to the package name
    pub fn project_slug(&self) -> Option<&str> {
        self.package_name()
    }

    /// Key/value pairs in a stable order; absent keys are omitted, never empty
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries: Vec<(&'static str, String)> = self
            .controls
            .entries()
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();

        entries.push(("email", self.email.clone()));
        entries.push(("full_name", self.full_name.clone()));
        let optional = [
            ("github_username", self.github_username.as_deref()),
            ("project_name", self.project_name.as_deref()),
            ("package_name", self.package_name()),
            ("project_slug", self.project_slug()),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                entries.push((key, value.to_string()));
            }
        }
        entries.push(("open_source_license", self.open_source_license.clone()));
        entries.push(("version", self.version.clone()));
        entries.push((
            "project_short_description",
            self.project_short_description.clone(),
        ));
        entries
    }

    /// Look up a single key as the renderer would see it
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl Serialize for GenerationContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Load both inputs and derive the context
pub fn derive_context(
    project_config_path: &Path,
    template_dir: &Path,
    options: &ContextOptions,
) -> Result<GenerationContext> {
    let config = ProjectConfig::load(project_config_path)?;
    let defaults = TemplateDefaults::load(template_dir)?;
    Ok(GenerationContext::derive(&config, &defaults, options))
}

/// Split the last two `/`-separated segments of a repository URL
///
/// `git@github.com:alice/widget.git` yields `(Some("alice"), Some("widget"))`: the
/// owner segment stops at the scp-style `host:` prefix and only a trailing
/// `.git` is removed from the name. Trailing slashes are ignored.
fn split_repository(repo: &str) -> (Option<String>, Option<String>) {
    let repo = repo.trim_end_matches('/');
    let (head, last) = match repo.rsplit_once('/') {
        Some((head, last)) => (Some(head), last),
        None => (None, repo.rsplit(':').next().unwrap_or(repo)),
    };
    let name = Some(last.strip_suffix(".git").unwrap_or(last))
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    let owner = head
        .map(|h| h.rsplit(|c| c == '/' || c == ':').next().unwrap_or(h))
        .filter(|o| !o.is_empty())
        .map(str::to_string);
    (owner, name)
}

fn first_package(config: &ProjectConfig, options: &ContextOptions) -> Option<String> {
    match config.packages.as_ref()?.first()? {
        PackageEntry::Name(name) => Some(name.clone()),
        PackageEntry::Include { include } if options.accept_legacy_packages => {
            Some(include.clone())
        }
        PackageEntry::Include { .. } => None,
    }
}

/// Lowercase ASCII slug: alphanumeric runs joined by a single separator
///
/// Non-ASCII text is transliterated first, so `Café` becomes `cafe`.
pub fn slugify(input: &str, separator: char) -> String {
    let ascii = deunicode::deunicode(input);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
