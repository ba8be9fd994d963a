//! Configuration management for the repo-inspect CLI.
//!
//! Settings come from two places: an optional TOML file and the command
//! line. The file is read once, merged with the flags into an
//! [`InspectConfig`] and that value is passed by reference to everything
//! that needs it.
//!
//! The file is looked up in the current directory unless `--config` names
//! one explicitly.

use std::{
    fs,
    path::{Path, PathBuf},
};

use repo_inspect_core::{OutputFormat, SectionFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repo-inspect.toml";

/// Output format used when neither the flag nor the file sets one
pub const DEFAULT_FORMAT: &str = "json";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Contents of the configuration file.
///
/// # Example TOML Configuration
///
/// ```toml
/// [output]
/// format = "table"
/// sections = ["rulesets", "teams"]
///
/// [github]
/// api_base_url = "https://github.example.com/api/v3"
/// ```
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub github: GitHubConfig,
}

/// Defaults for the output flags.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// One of `json`, `yaml`, `yml` or `table`
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub sections: Option<Vec<String>>,
}

/// GitHub connection settings.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Base URL of the REST API, for GitHub Enterprise Server installations
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read,
    /// contains invalid TOML or carries an unparseable `api_base_url`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        config.validate()?;

        info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Loads the explicitly requested file, or the default file when it exists.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(base) = &self.github.api_base_url {
            Url::parse(base).map_err(|e| {
                Error::Config(format!("Invalid github.api_base_url '{}': {}", base, e))
            })?;
        }

        Ok(())
    }
}

/// Returns the configuration file path.
///
/// Uses `config_path` when given, otherwise [`DEFAULT_CONFIG_FILENAME`] in
/// the current directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Settings for one inspection, after merging flags over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// `owner/name` from the command line; `None` means the current repository
    pub repository: Option<String>,
    pub format: OutputFormat,
    pub sections: SectionFilter,
    pub verbose: bool,
    pub api_base_url: Option<String>,
}

impl InspectConfig {
    /// Merges command-line values over the configuration file.
    ///
    /// The output format is parsed here, so an unsupported value is rejected
    /// before any request is made or any output is written.
    pub fn from_sources(
        repository: Option<String>,
        format: Option<&str>,
        sections: Vec<String>,
        verbose: bool,
        file: AppConfig,
    ) -> Result<Self, Error> {
        let format = format
            .or(file.output.format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
            .parse::<OutputFormat>()?;

        let sections = if sections.is_empty() {
            file.output.sections.unwrap_or_default()
        } else {
            sections
        };
        let sections = SectionFilter::new(sections);

        let unknown = sections.unknown_names();
        if !unknown.is_empty() {
            warn!(sections = ?unknown, "Ignoring unknown section names");
        }

        Ok(Self {
            repository,
            format,
            sections,
            verbose,
            api_base_url: file.github.api_base_url,
        })
    }
}
