//! # Configuration
//!
//! Centralizes the few settings Fuelcheck has, with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fuelcheck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FuelcheckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Symbol shown next to prices, e.g. "R$" or "$".
    pub currency_symbol: Option<String>,
    /// How long the loading screen stays up, in milliseconds.
    pub loading_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";
pub const DEFAULT_LOADING_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency_symbol: String,
    pub loading_ms: u64,
}

impl Default for ResolvedConfig {
    // Pure defaults, no env lookup: tests relying on Default must not be
    // swayed by an ambient FUELCHECK_CURRENCY.
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            loading_ms: DEFAULT_LOADING_MS,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.fuelcheck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fuelcheck").join("config.toml"))
}

/// Load config from `~/.fuelcheck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FuelcheckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FuelcheckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FuelcheckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FuelcheckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FuelcheckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Fuelcheck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# currency_symbol = "R$"   # Shown next to prices (env: FUELCHECK_CURRENCY)
# loading_ms = 2000        # Splash screen duration in milliseconds
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_currency` is from the `--currency` flag (None = not specified).
pub fn resolve(config: &FuelcheckConfig, cli_currency: Option<&str>) -> ResolvedConfig {
    resolve_with_env(
        config,
        cli_currency,
        std::env::var("FUELCHECK_CURRENCY").ok(),
    )
}

/// Same as [`resolve`], with the env lookup threaded in as a parameter so
/// tests stay hermetic instead of mutating the process environment.
fn resolve_with_env(
    config: &FuelcheckConfig,
    cli_currency: Option<&str>,
    env_currency: Option<String>,
) -> ResolvedConfig {
    // Currency symbol: CLI → env → config → default
    let currency_symbol = cli_currency
        .map(|s| s.to_string())
        .or(env_currency)
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    ResolvedConfig {
        currency_symbol,
        loading_ms: config.general.loading_ms.unwrap_or(DEFAULT_LOADING_MS),
    }
}
