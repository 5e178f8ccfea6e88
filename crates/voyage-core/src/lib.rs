pub mod config;
pub mod error;

pub use config::{Config, LookupConfig, ServiceConfig, StartTab, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt, ValidationError};

use anyhow::{Context, Result};

/// Initialize logging.
///
/// The terminal belongs to the UI, so events are written to `Config::log_path`
/// instead of stdout. `RUST_LOG` overrides the default `info` filter.
pub fn init(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.config_dir)
        .context("Failed to create config directory")?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!("Voyage core initialized");
    Ok(())
}
