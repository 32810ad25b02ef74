//! Configuration loading and setting resolution
//!
//! Settings resolve in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MODELHUB_CONFIG";
/// Environment variable overriding the HTTP bind address
pub const BIND_ENV_VAR: &str = "MODELHUB_BIND";
/// Environment variable overriding the log level
pub const LOG_ENV_VAR: &str = "MODELHUB_LOG";

/// Compiled defaults used when neither CLI, ENV nor TOML supply a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub bind_address: String,
    pub log_level: String,
    pub event_capacity: usize,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5731".to_string(),
            log_level: "info".to_string(),
            event_capacity: 100,
        }
    }
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing level filter ("trace", "debug", "info", "warn", "error")
    pub level: Option<String>,
}

/// On-disk TOML configuration
///
/// Every field is optional; a missing file or a missing key falls back to
/// [`CompiledDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub event_capacity: Option<usize>,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub log_level: String,
    pub event_capacity: usize,
    /// Config file the values were read from, if any
    pub source_file: Option<PathBuf>,
}

/// Command-line overrides handed to the resolver
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

/// Resolves [`ServiceConfig`] from CLI → ENV → TOML → compiled defaults
pub struct ConfigResolver {
    app_name: String,
    defaults: CompiledDefaults,
}

impl ConfigResolver {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            defaults: CompiledDefaults::default(),
        }
    }

    /// Replace the compiled defaults (tests)
    pub fn with_defaults(mut self, defaults: CompiledDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Platform config path: `<config_dir>/modelhub/<app_name>.toml`
    pub fn default_config_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("modelhub").join(format!("{}.toml", self.app_name)))
    }

    /// Pick the config file to read
    ///
    /// An explicit path (CLI or ENV) must exist; the platform default is
    /// only used when present.
    fn locate_config_file(&self, cli: &CliOverrides) -> Result<Option<PathBuf>> {
        if let Some(path) = &cli.config_file {
            return require_file(path).map(Some);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return require_file(Path::new(&path)).map(Some);
            }
        }

        Ok(self.default_config_path().filter(|p| p.is_file()))
    }

    /// Resolve the service configuration
    pub fn resolve(&self, cli: &CliOverrides) -> Result<ServiceConfig> {
        let source_file = self.locate_config_file(cli)?;
        let toml_config = match &source_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading TOML config");
                TomlConfig::load(path)?
            }
            None => {
                debug!("No config file found, using defaults");
                TomlConfig::default()
            }
        };

        let bind_address = resolve_setting(
            cli.bind_address.as_deref(),
            BIND_ENV_VAR,
            toml_config.bind_address.as_deref(),
            &self.defaults.bind_address,
        );
        let log_level = resolve_setting(
            cli.log_level.as_deref(),
            LOG_ENV_VAR,
            toml_config.logging.level.as_deref(),
            &self.defaults.log_level,
        );

        let event_capacity = match toml_config.event_capacity {
            Some(0) => {
                warn!("event_capacity = 0 is invalid, using default");
                self.defaults.event_capacity
            }
            Some(capacity) => capacity,
            None => self.defaults.event_capacity,
        };

        Ok(ServiceConfig {
            bind_address,
            log_level,
            event_capacity,
            source_file,
        })
    }
}

fn require_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::Config(format!("Config file not found: {}", path.display())))
    }
}

/// Resolve one string setting, ignoring blank values at every tier
pub fn resolve_setting(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_value: Option<&str>,
    default: &str,
) -> String {
    if let Some(value) = cli_arg.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }

    if let Ok(value) = std::env::var(env_var_name) {
        if !value.trim().is_empty() {
            return value;
        }
    }

    if let Some(value) = toml_value.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }

    default.to_string()
}
