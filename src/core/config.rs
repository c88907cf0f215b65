// src/core/config.rs
use std::env;
use std::path::{Path, PathBuf};
use log::LevelFilter;
use thiserror::Error;

use crate::generators::LengthPolicy;
use crate::models::ClassSelection;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Maximum length {max} is smaller than minimum length {min}")]
    InvertedBounds { min: usize, max: usize },

    #[error("Failed to read {}: {reason}", .path.display())]
    EnvFile { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub length_policy: LengthPolicy,
    pub default_length: usize,
    pub default_classes: ClassSelection,
    pub seed: Option<u64>,

    // Web Interface
    pub api_address: String,
    pub api_port: u16,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            length_policy: LengthPolicy::default(),
            default_length: 10,
            default_classes: ClassSelection::default_set(),
            seed: None,

            // Web Interface
            api_address: "127.0.0.1".to_string(),
            api_port: 5000,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| invalid(key, value, e))
}

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_MIN_LENGTH") {
            let min: usize = parse_number("PASSGEN_MIN_LENGTH", &val)?;
            if min == 0 {
                return Err(invalid("PASSGEN_MIN_LENGTH", &val, "must be at least 1"));
            }
            config.length_policy.min = min;
        }

        if let Some(val) = lookup("PASSGEN_MAX_LENGTH") {
            config.length_policy.max = match val.trim().to_lowercase().as_str() {
                "" | "none" | "unbounded" => None,
                _ => Some(parse_number("PASSGEN_MAX_LENGTH", &val)?),
            };
        }

        if let Some(max) = config.length_policy.max {
            if max < config.length_policy.min {
                return Err(ConfigError::InvertedBounds {
                    min: config.length_policy.min,
                    max,
                });
            }
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            config.default_length = parse_number("PASSGEN_DEFAULT_LENGTH", &val)?;
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_CLASSES") {
            let classes: ClassSelection = val
                .parse()
                .map_err(|e: String| invalid("PASSGEN_DEFAULT_CLASSES", &val, e))?;
            if classes.is_empty() {
                return Err(invalid(
                    "PASSGEN_DEFAULT_CLASSES",
                    &val,
                    "at least one class is required",
                ));
            }
            config.default_classes = classes;
        }

        if let Some(val) = lookup("PASSGEN_SEED") {
            config.seed = Some(parse_number("PASSGEN_SEED", &val)?);
        }

        // Web Interface
        if let Some(address) = lookup("PASSGEN_API_ADDRESS") {
            config.api_address = address;
        }

        if let Some(val) = lookup("PASSGEN_API_PORT") {
            config.api_port = parse_number("PASSGEN_API_PORT", &val)?;
        }

        // Logging
        if let Some(level) = lookup("PASSGEN_LOG_LEVEL") {
            config.log_level = parse_log_level(&level)
                .ok_or_else(|| invalid("PASSGEN_LOG_LEVEL", &level, "unknown log level"))?;
        }

        if let Some(file) = lookup("PASSGEN_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        Ok(config)
    }

    /// Loads `.env` files from the working directory and the user config directory.
    ///
    /// Variables already present in the environment are never overridden. Runs before
    /// logging is set up, so read failures are returned rather than logged.
    pub fn load_env_files() -> Result<Vec<PathBuf>> {
        let mut loaded = Vec::new();

        match dotenvy::dotenv() {
            Ok(path) => loaded.push(path),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFile {
                    path: PathBuf::from(".env"),
                    reason: e.to_string(),
                })
            }
        }

        if let Some(dir) = crate::utils::get_app_config_dir() {
            let path = dir.join("passgen.env");
            if Self::load_env_file(&path)? {
                loaded.push(path);
            }
        }

        Ok(loaded)
    }

    /// Loads one env file. Returns `Ok(false)` when the file does not exist.
    pub fn load_env_file(path: &Path) -> Result<bool> {
        match dotenvy::from_path(path) {
            Ok(()) => Ok(true),
            Err(e) if e.not_found() => Ok(false),
            Err(e) => Err(ConfigError::EnvFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}
