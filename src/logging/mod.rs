// src/logging/mod.rs
use std::env;
use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

fn builder(level: LevelFilter, overrides: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        // stdout is reserved for the generated password
        .target(Target::Stderr);

    if let Some(filters) = overrides {
        builder.parse_filters(filters);
    }

    builder
}

/// Installs the process logger. Call once, from `main`.
pub fn init(config: &Config) -> Result<()> {
    let overrides = env::var("RUST_LOG").ok();
    builder(config.log_level, overrides.as_deref()).try_init()?;

    log::debug!("Logger initialized at level {}", config.log_level);
    Ok(())
}
