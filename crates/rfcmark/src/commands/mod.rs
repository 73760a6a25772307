//! CLI command implementations.

pub(crate) mod references;
pub(crate) mod resolve;
pub(crate) mod title_block;

use std::path::PathBuf;

use clap::Args;
use rfcmark_config::{CliSettings, Config};
use rfcmark_xml::Dialect;

use crate::error::CliError;

pub(crate) use references::ReferencesArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use title_block::TitleBlockArgs;

/// Configuration options shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover rfcmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target xml2rfc version, 2 or 3 (overrides config).
    #[arg(long, value_parser = parse_dialect)]
    xml2rfc_version: Option<Dialect>,

    /// RFC bibliography base URL (overrides config).
    #[arg(long, env = "RFCMARK_RFC_BASE_URL")]
    rfc_base_url: Option<String>,

    /// Internet-Draft bibliography base URL (overrides config).
    #[arg(long, env = "RFCMARK_ID_BASE_URL")]
    id_base_url: Option<String>,
}

impl ConfigArgs {
    /// Load the configuration with command-line overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            version: self.xml2rfc_version,
            rfc_base_url: self.rfc_base_url.clone(),
            id_base_url: self.id_base_url.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

fn parse_dialect(value: &str) -> Result<Dialect, String> {
    let version: u8 = value
        .parse()
        .map_err(|_| format!("expected 2 or 3, got {value}"))?;
    Dialect::try_from(version).map_err(|e| e.to_string())
}
