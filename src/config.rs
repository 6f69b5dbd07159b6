//! Audit configuration.
//!
//! Defaults reproduce the stock layout: `index.html` audited against the
//! `components/` directory next to it, with the built-in component list.
//! A `docscheck.toml` in the working directory (or a file passed with
//! `--config`) can override any of them.
//!
//! # Example Configuration
//!
//! ```toml
//! document = "docs/index.html"
//! components_root = "docs/components"
//! expected_components = ["accordion", "modal", "toast"]
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "docscheck.toml";
pub const DEFAULT_DOCUMENT: &str = "index.html";
pub const DEFAULT_COMPONENTS_ROOT: &str = "components";

/// Components the documentation page is expected to cover.
pub const EXPECTED_COMPONENTS: &[&str] = &[
    "accordion",
    "alert",
    "badge",
    "card",
    "carousel",
    "loading-button",
    "modal",
    "nav-tabs",
    "navbar",
    "pagination",
    "placeholder",
    "spinner",
    "theme-toggle",
    "toast",
    "tooltip",
];

/// Errors that can occur when loading audit configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// On-disk shape of `docscheck.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub document: Option<PathBuf>,

    #[serde(default)]
    pub components_root: Option<PathBuf>,

    #[serde(default)]
    pub expected_components: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: Self = toml::from_str(content)?;
        if let Some(components) = &file.expected_components {
            validate_components(components)?;
        }
        Ok(file)
    }

    /// Load a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load a config file if present; a missing file yields the defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }
}

/// Fully resolved settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub document: PathBuf,
    pub components_root: PathBuf,
    pub expected_components: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            components_root: PathBuf::from(DEFAULT_COMPONENTS_ROOT),
            expected_components: EXPECTED_COMPONENTS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AuditConfig {
    /// Layer a config file over the defaults.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            document: file.document.unwrap_or(defaults.document),
            components_root: file.components_root.unwrap_or(defaults.components_root),
            expected_components: defaults.expected_components,
        };
        match file.expected_components {
            Some(components) => config.with_expected_components(components),
            None => Ok(config),
        }
    }

    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = document.into();
        self
    }

    pub fn with_components_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.components_root = root.into();
        self
    }

    /// Replace the expected component list, enforcing its invariants.
    pub fn with_expected_components<I, S>(mut self, components: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        validate_components(&components)?;
        self.expected_components = components;
        Ok(self)
    }
}

/// The component list must be non-empty, without blanks or duplicates.
pub fn validate_components(components: &[String]) -> Result<(), ConfigError> {
    if components.is_empty() {
        return Err(ConfigError::Validation(
            "expected_components cannot be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for component in components {
        if component.trim().is_empty() {
            return Err(ConfigError::Validation(
                "expected_components cannot contain an empty name".into(),
            ));
        }
        if component.contains('"') {
            return Err(ConfigError::Validation(format!(
                "Component name cannot contain a double quote: {component}"
            )));
        }
        if !seen.insert(component.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate component name: {component}"
            )));
        }
    }

    Ok(())
}
