//! Configuration management for outdoorsy
//!
//! Config stored at: ~/.config/outdoorsy/config.json

use outdoorsy_store::DEFAULT_DB_FILE;
use outdoorsy_types::{ConfigError, OutputFormat, Result, SortKey};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Database file or directory override (optional)
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Sort order used by `view` when none is given
    #[serde(default)]
    pub default_sort: SortKey,

    /// Default output format (table, json)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            default_sort: SortKey::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("outdoorsy");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Database file to use
    ///
    /// `override_path` (CLI flag or env var) wins over the configured path,
    /// which wins over `customers.db` in the working directory. A path that
    /// names an existing directory gets `customers.db` appended.
    pub fn db_file(&self, override_path: Option<&Path>) -> PathBuf {
        let chosen = override_path
            .map(Path::to_path_buf)
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        if chosen.is_dir() {
            chosen.join(DEFAULT_DB_FILE)
        } else {
            chosen
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Outdoorsy Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Database:       {}",
            self.db_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("(default) ./{}", DEFAULT_DB_FILE))
        )?;
        writeln!(f, "Default sort:   {}", self.default_sort)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        Ok(())
    }
}
