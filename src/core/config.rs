// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

// Configuration for the password generator CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: i64,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            min_password_length: 4,
            max_password_length: 4096,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The logger is installed from the returned config, so problems found
    /// while loading come back as messages for the caller to log afterwards.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(min) = parse_var(&lookup, "MIN_PASSWORD_LENGTH", &mut warnings) {
            config.min_password_length = min;
        }

        if let Some(max) = parse_var(&lookup, "MAX_PASSWORD_LENGTH", &mut warnings) {
            config.max_password_length = max;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        (config, warnings)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key));
            None
        }
    }
}
