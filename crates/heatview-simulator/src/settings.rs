//! Runtime settings of the simulator
//!
//! Read from `HEATVIEW_*` environment variables (a `.env` file in the working
//! directory is loaded first if present). Rendering options come from an
//! optional JSON file holding a [`Config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use heatview_core::config::{Config, ConfigError};
use log::{debug, info};
use thiserror_no_std::Error;

/// Directory holding the page skeletons
pub const TEMPLATE_DIR_VAR: &str = "HEATVIEW_TEMPLATE_DIR";
/// Directory the rendered pages are written to
pub const OUTPUT_DIR_VAR: &str = "HEATVIEW_OUTPUT_DIR";
/// Number of ticks to run (0 runs forever)
pub const TICKS_VAR: &str = "HEATVIEW_TICKS";
/// Tick period in milliseconds
pub const TICK_MS_VAR: &str = "HEATVIEW_TICK_MS";
/// Recorded serial traffic to replay instead of synthetic data
pub const SERIAL_LOG_VAR: &str = "HEATVIEW_SERIAL_LOG";
/// JSON rendering configuration
pub const CONFIG_VAR: &str = "HEATVIEW_CONFIG";

const DEFAULT_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
const DEFAULT_OUTPUT_DIR: &str = "heatview-out";
const DEFAULT_TICKS: u32 = 60;

/// One second, the sampling period of the deployed monitor
const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Cannot read config file {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("Cannot parse config file: {reason}")]
    ConfigParse { reason: String },

    #[error("Config rejected: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Ticks to run, `None` for no limit
    pub ticks: Option<u32>,
    pub tick: Duration,
    pub serial_log: Option<PathBuf>,
    pub config: Config,
}

impl Settings {
    /// Load `.env`, then read the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file"),
            Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let template_dir = lookup(TEMPLATE_DIR_VAR).unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.into());
        let output_dir = lookup(OUTPUT_DIR_VAR).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

        let ticks = match lookup(TICKS_VAR) {
            Some(value) => parse_number::<u32>(TICKS_VAR, &value)?,
            None => DEFAULT_TICKS,
        };
        let tick_ms = match lookup(TICK_MS_VAR) {
            Some(value) => parse_number::<u64>(TICK_MS_VAR, &value)?,
            None => DEFAULT_TICK_MS,
        };

        let config = match lookup(CONFIG_VAR) {
            Some(path) => load_config(Path::new(&path))?,
            None => Config::default(),
        };

        Ok(Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            ticks: (ticks > 0).then_some(ticks),
            tick: Duration::from_millis(tick_ms),
            serial_log: lookup(SERIAL_LOG_VAR).map(PathBuf::from),
            config,
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, SettingsError> {
    value.trim().parse().map_err(|_| SettingsError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

/// Read and validate a JSON config file
pub fn load_config(path: &Path) -> Result<Config, SettingsError> {
    let json = std::fs::read_to_string(path).map_err(|e| SettingsError::ConfigRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let config = parse_config(&json)?;
    info!("Loaded rendering config from {}", path.display());
    Ok(config)
}

/// Parse and validate a JSON config; missing fields keep their defaults
pub fn parse_config(json: &str) -> Result<Config, SettingsError> {
    let config: Config = serde_json::from_str(json).map_err(|e| SettingsError::ConfigParse {
        reason: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}
