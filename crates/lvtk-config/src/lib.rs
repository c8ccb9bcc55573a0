//! Configuration management for the LVtk documentation tools.
//!
//! Parses `lvtk-docs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Page Table
//!
//! The optional `[pages]` table replaces the built-in LVtk documentation
//! table. It is a nested page literal:
//!
//! ```toml
//! [pages]
//! route = "/documentation/index"
//! name = "Index"
//! module = "DocIndex"
//!
//! [[pages.children]]
//! route = "/documentation/why"
//! name = "Why LVtk?"
//! module = "WhyLv2Lvtk"
//! ```

use std::path::{Path, PathBuf};

use lvtk_nav::{PageNode, PageTree, TreeError, ValidationPolicy, documentation_pages};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override strict module identifier validation.
    pub strict_module_ids: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lvtk-docs.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page table validation rules.
    pub validation: ValidationConfig,
    /// Custom page table; the built-in documentation table when absent.
    pub pages: Option<PageNode>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Page table validation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject page tables where two pages share a module identifier.
    pub strict_module_ids: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Page table breaks the authoring contract.
    #[error("Invalid page table: {0}")]
    PageTable(#[from] TreeError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lvtk-docs.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Validation policy for building the page tree.
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            strict_module_ids: self.validation.strict_module_ids,
        }
    }

    /// Whether the built-in documentation table is used.
    #[must_use]
    pub fn uses_builtin_pages(&self) -> bool {
        self.pages.is_none()
    }

    /// Build the validated page tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PageTable` if the table fails validation.
    pub fn page_tree(&self) -> Result<PageTree, ConfigError> {
        let root = self.pages.clone().unwrap_or_else(documentation_pages);
        Ok(PageTree::with_policy(root, self.validation_policy())?)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strict) = settings.strict_module_ids {
            self.validation.strict_module_ids = strict;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}
