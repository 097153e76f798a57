//! TOML configuration with environment overrides.
//!
//! Resolution order, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. The config file (explicit path, `LEADSHEET_CONFIG`, or the platform
//!    config dir)
//! 3. `LEADSHEET_*` environment variables
//! 4. Command-line flags (applied by the binary)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, ValidationMode, WriteMode};

/// Project name used for the config directory and env prefix.
pub const PROJECT_NAME: &str = "leadsheet";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LEADSHEET_CONFIG";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3010;

/// Default sheet holding contact rows.
pub const DEFAULT_SHEET_NAME: &str = "Contact Form Data";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadsheetConfig {
    /// HTTP listener and static hosting
    pub server: ServerConfig,
    /// Spreadsheet store
    pub store: StoreConfig,
    /// Submission validation
    pub validation: ValidationConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Directory served for non-API paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    /// Allow cross-origin requests
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            static_dir: Some(PathBuf::from("public")),
            cors: true,
        }
    }
}

/// `[store]` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the XLSX file
    pub path: PathBuf,
    /// Sheet holding contact rows
    pub sheet_name: String,
    /// Append concurrency policy
    pub write_mode: WriteMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.xlsx"),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            write_mode: WriteMode::Direct,
        }
    }
}

/// `[validation]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Trim required fields before checking they are non-empty
    pub trim_before_check: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            trim_before_check: true,
        }
    }
}

impl ValidationConfig {
    /// The validation mode this section selects.
    pub fn mode(&self) -> ValidationMode {
        ValidationMode::from_trim_before_check(self.trim_before_check)
    }
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LeadsheetConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config file path: explicit, then `LEADSHEET_CONFIG`, then default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Loads the config file (if present) and applies environment overrides.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Applies `LEADSHEET_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("LEADSHEET_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LEADSHEET_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("LEADSHEET_PORT is not a port: {port}")))?;
        }
        if let Some(dir) = lookup("LEADSHEET_STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = lookup("LEADSHEET_STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
