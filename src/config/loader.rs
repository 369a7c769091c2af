//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

use crate::source::{AliasSpec, DEFAULT_INITIAL_DOMAIN};
use crate::state::PageSize;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DASHNAV_CONFIG";

/// Environment variable overriding the initial domain.
pub const DOMAIN_ENV: &str = "DASHNAV_DOMAIN";

/// Environment variable overriding items per page.
pub const ITEMS_PER_PAGE_ENV: &str = "DASHNAV_ITEMS_PER_PAGE";

/// Items per page when nothing is configured.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => panic!("default items per page must be positive"),
};

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but has an unusable value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name (config key or env var).
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dashnav/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog file (`.toml` or `.json`); built-in catalog when absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Raw domain name selected at start.
    #[serde(default)]
    pub initial_domain: Option<String>,

    /// Rows per page in paginated tables.
    #[serde(default)]
    pub items_per_page: Option<i64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Aliases appended to the catalog provider's alias table.
    #[serde(default)]
    pub extra_aliases: Option<Vec<AliasSpec>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog file, `None` for the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Raw domain name selected at start.
    pub initial_domain: String,
    /// Rows per page.
    pub items_per_page: PageSize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Extra aliases.
    pub extra_aliases: Vec<AliasSpec>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            initial_domain: DEFAULT_INITIAL_DOMAIN.to_string(),
            items_per_page: PageSize::from(DEFAULT_ITEMS_PER_PAGE),
            log_file_path: default_log_path(),
            extra_aliases: Vec::new(),
        }
    }
}

fn page_size_setting(field: &'static str, value: i64) -> Result<PageSize, ConfigError> {
    PageSize::try_from(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dashnav/dashnav.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    // Try to get platform-appropriate state directory
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dashnav").join("dashnav.log")
    } else {
        // Fallback to current directory
        PathBuf::from("dashnav.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dashnav/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dashnav").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `DASHNAV_CONFIG` environment variable
/// 3. Default path `~/.config/dashnav/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `items_per_page` is not positive.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let items_per_page = match config.items_per_page {
        Some(value) => page_size_setting("items_per_page", value)?,
        None => defaults.items_per_page,
    };

    Ok(ResolvedConfig {
        catalog_path: config.catalog_path.or(defaults.catalog_path),
        initial_domain: config.initial_domain.unwrap_or(defaults.initial_domain),
        items_per_page,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        extra_aliases: config.extra_aliases.unwrap_or(defaults.extra_aliases),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DASHNAV_DOMAIN`: Override initial domain
/// - `DASHNAV_ITEMS_PER_PAGE`: Override items per page
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `DASHNAV_ITEMS_PER_PAGE` is not a
/// positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(domain) = std::env::var(DOMAIN_ENV) {
        config.initial_domain = domain;
    }

    if let Ok(raw) = std::env::var(ITEMS_PER_PAGE_ENV) {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                field: ITEMS_PER_PAGE_ENV,
                reason: e.to_string(),
            })?;
        config.items_per_page = page_size_setting(ITEMS_PER_PAGE_ENV, value)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    catalog_override: Option<PathBuf>,
    domain_override: Option<String>,
) -> ResolvedConfig {
    if let Some(catalog) = catalog_override {
        config.catalog_path = Some(catalog);
    }

    if let Some(domain) = domain_override {
        config.initial_domain = domain;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
