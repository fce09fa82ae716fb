use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Failed to parse logging config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("A global logger is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// The `[logging]` table of a host or plugin config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    /// Lets `RUST_LOG` override `level`.
    pub env: bool,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            env: false,
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    logging: LoggingConfig,
}

impl LoggingConfig {
    /// Reads the `[logging]` table out of a TOML document. A missing table
    /// or missing keys fall back to the defaults.
    pub fn from_toml(source: &str) -> Result<Self, LoggingError> {
        let file: ConfigFile = toml::from_str(source)?;
        file.logging.level_filter()?;
        Ok(file.logging)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, LoggingError> {
        LevelFilter::from_str(&self.level).map_err(|_| LoggingError::InvalidLevel(self.level.clone()))
    }
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// Does nothing when logging is disabled.
pub fn init_log(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;
    let filter = if config.env {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    } else {
        EnvFilter::default().add_directive(level.into())
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(true)
        .with_thread_names(config.threads)
        .with_thread_ids(config.threads);

    if config.timestamp {
        let fmt_layer = fmt_layer.with_timer(fmt::time::UtcTime::new(
            time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        ));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt_layer.without_time();
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()?;
    }
    Ok(())
}
