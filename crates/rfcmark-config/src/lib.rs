//! Configuration management for rfcmark.
//!
//! Parses `rfcmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! The bibliography base URLs support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `citations.rfc_base_url`
//! - `citations.id_base_url`

mod expand;

use std::path::{Path, PathBuf};

use rfcmark_citation::{CitationResolver, DEFAULT_ID_BASE_URL, DEFAULT_RFC_BASE_URL};
use rfcmark_xml::Dialect;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override target xml2rfc version.
    pub version: Option<Dialect>,
    /// Override RFC bibliography base URL.
    pub rfc_base_url: Option<String>,
    /// Override Internet-Draft bibliography base URL.
    pub id_base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rfcmark.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// Citation resolution configuration.
    pub citations: CitationsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Target xml2rfc vocabulary, `2` or `3`.
    pub version: Dialect,
}

/// Citation resolution configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CitationsConfig {
    /// Archive for `reference.RFC.*.xml` files.
    pub rfc_base_url: String,
    /// Archive for `reference.I-D.*.xml` files.
    pub id_base_url: String,
}

impl Default for CitationsConfig {
    fn default() -> Self {
        Self {
            rfc_base_url: DEFAULT_RFC_BASE_URL.to_owned(),
            id_base_url: DEFAULT_ID_BASE_URL.to_owned(),
        }
    }
}

impl CitationsConfig {
    /// Build a resolver for the configured archives.
    #[must_use]
    pub fn resolver(&self) -> CitationResolver {
        CitationResolver::new(self.rfc_base_url.clone(), self.id_base_url.clone())
    }
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
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`citations.rfc_base_url`").
        field: String,
        /// Error message (e.g., "${`RFC_BIB`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a base URL to end with `/`, since file names are appended verbatim.
fn require_trailing_slash(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.ends_with('/') {
        return Err(ConfigError::Validation(format!("{field} must end with /")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rfcmark.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(version) = settings.version {
            self.output.version = version;
        }
        if let Some(url) = &settings.rfc_base_url {
            self.citations.rfc_base_url.clone_from(url);
        }
        if let Some(url) = &settings.id_base_url {
            self.citations.id_base_url.clone_from(url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_citations()
    }

    /// Validate citation base URLs.
    fn validate_citations(&self) -> Result<(), ConfigError> {
        for (url, field) in [
            (&self.citations.rfc_base_url, "citations.rfc_base_url"),
            (&self.citations.id_base_url, "citations.id_base_url"),
        ] {
            require_non_empty(url, field)?;
            require_http_url(url, field)?;
            require_trailing_slash(url, field)?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.citations.rfc_base_url =
            expand::expand_env(&self.citations.rfc_base_url, "citations.rfc_base_url")?;
        self.citations.id_base_url =
            expand::expand_env(&self.citations.id_base_url, "citations.id_base_url")?;
        Ok(())
    }
}
