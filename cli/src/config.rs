//! Configuration for the fibernet tool.
//!
//! Supports:
//! - CLI arguments (highest priority)
//! - Environment variables
//! - TOML config file
//! - Defaults (lowest priority)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use common::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Graph file used when neither the command line nor the config names one.
pub const DEFAULT_GRAPH_FILE: &str = "grafo.txt";

/// Command-line arguments for fibernet.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibernet")]
#[command(about = "Fiber optic network editor - edit links, check connectivity, compute the minimum backbone")]
#[command(version)]
pub struct CliArgs {
    /// Graph file read by "load" and written by "save"
    #[arg(long, short = 'f', env = "FIBERNET_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, short = 'c', default_value = "fibernet.toml", env = "FIBERNET_CONFIG")]
    pub config: PathBuf,

    /// Log level (RUST_LOG, when set, takes precedence)
    #[arg(long, env = "FIBERNET_LOG")]
    pub log_level: Option<String>,

    /// Load the graph file before showing the menu
    #[arg(long)]
    pub load: bool,
}

/// Full configuration (merged from all sources).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the graph file.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit printed after edge weights.
    pub unit: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_GRAPH_FILE),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { unit: "km".to_string() }
    }
}

impl AppConfig {
    /// Load configuration from CLI args and optional config file.
    ///
    /// Priority: CLI args > Environment > Config file > Defaults.
    /// A missing config file is fine; an unreadable or malformed one is not.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let mut config = if args.config.exists() {
            Self::from_file(&args.config)
                .with_context(|| format!("Failed to load config from {:?}", args.config))?
        } else {
            Self::default()
        };

        if let Some(ref file) = args.file {
            config.storage.path = file.clone();
        }
        if let Some(ref level) = args.log_level {
            config.logging.level = LogLevel::from(level.as_str());
        }

        Ok(config)
    }

    /// Load configuration from a TOML file.
    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(config: PathBuf) -> CliArgs {
        CliArgs {
            file: None,
            config,
            log_level: None,
            load: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.path, PathBuf::from("grafo.txt"));
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.display.unit, "km");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = AppConfig::load(&args(PathBuf::from("nonexistent.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_file_and_cli_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fibernet.toml");
        std::fs::write(
            &path,
            "[storage]\npath = \"rede.txt\"\n\n[logging]\nlevel = \"debug\"\n\n[display]\nunit = \"mi\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&args(path.clone())).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("rede.txt"));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.display.unit, "mi");

        let mut cli = args(path);
        cli.file = Some(PathBuf::from("other.txt"));
        cli.log_level = Some("warning".to_string());
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("other.txt"));
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.display.unit, "mi");
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fibernet.toml");
        std::fs::write(&path, "[display]\nunit = \"m\"\n").unwrap();

        let config = AppConfig::load(&args(path)).unwrap();
        assert_eq!(config.storage.path, PathBuf::from(DEFAULT_GRAPH_FILE));
        assert_eq!(config.display.unit, "m");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fibernet.toml");
        std::fs::write(&path, "[storage\npath = 3\n").unwrap();

        assert!(AppConfig::load(&args(path)).is_err());
    }
}
