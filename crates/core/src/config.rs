use crate::error::{AcpiError, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Oldest ACPI interface version the proc tree parsers understand
pub const MIN_ACPI_VERSION: i64 = 20020214;

/// Default number of objects kept per category
pub const MAX_ITEMS: usize = 10;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the ACPI proc tree
    pub acpi_root: PathBuf,

    /// File holding the bare ACPICA version, read when `<root>/info` is missing
    pub acpica_version_file: PathBuf,

    /// Capacity of each record collection
    pub max_items: usize,

    /// Minimum interface version accepted by the support probe
    pub min_acpi_version: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acpi_root: PathBuf::from("/proc/acpi"),
            acpica_version_file: PathBuf::from("/sys/module/acpi/parameters/acpica_version"),
            max_items: MAX_ITEMS,
            min_acpi_version: MIN_ACPI_VERSION,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in order of preference:
    /// 1. CLI arguments override everything
    /// 2. JSON config file if specified
    /// 3. Default config file locations
    /// 4. Built-in defaults
    pub fn load(cli_config: Option<&CliConfig>, json_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from default config locations
        if let Some(default_config) = Self::load_default_config()? {
            config.merge(default_config);
        }

        // Override with JSON config file if specified
        if let Some(path) = json_path {
            let file_config = Self::load_from_file(path)?;
            config.merge(file_config);
        }

        // Override with CLI arguments
        if let Some(cli) = cli_config {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific JSON file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AcpiError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            AcpiError::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    fn load_default_config() -> Result<Option<Self>> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(Some(config)),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                        continue;
                    }
                }
            }
        }

        Ok(None)
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("acpistat").join("config.json"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".acpistat.json"));
        }

        // Current directory
        paths.push(PathBuf::from("acpistat.json"));

        paths
    }

    /// Take every value of `other` that differs from the built-in default
    fn merge(&mut self, other: Self) {
        let defaults = Self::default();

        if other.acpi_root != defaults.acpi_root {
            self.acpi_root = other.acpi_root;
        }
        if other.acpica_version_file != defaults.acpica_version_file {
            self.acpica_version_file = other.acpica_version_file;
        }
        if other.max_items != defaults.max_items {
            self.max_items = other.max_items;
        }
        if other.min_acpi_version != defaults.min_acpi_version {
            self.min_acpi_version = other.min_acpi_version;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(root) = &cli.acpi_root {
            self.acpi_root = root.clone();
        }
        if let Some(max_items) = cli.max_items {
            self.max_items = max_items;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(AcpiError::config("max_items must be at least 1"));
        }

        if self.max_items > 64 {
            return Err(AcpiError::config("max_items must be at most 64"));
        }

        if self.acpi_root.as_os_str().is_empty() {
            return Err(AcpiError::config("acpi_root must not be empty"));
        }

        Ok(())
    }
}

/// CLI configuration (temporary struct for CLI parsing)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub acpi_root: Option<PathBuf>,
    pub max_items: Option<usize>,
}
