//! Configuration module
//!
//! Handles loading and saving of stylecmd.toml configuration files.

mod types;

pub use types::{Config, LogDriver};

use crate::error::{CommandError, Result};
use crate::output::{ChannelLog, LogSink, TracingLog};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "stylecmd.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        CommandError::Config(format!(
            "Cannot read config from '{}': {}. Run 'stylecmd config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration when the file exists, defaults otherwise
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Log sink described by the configuration
pub fn log_sink(config: &Config) -> Box<dyn LogSink> {
    match config.log_driver {
        LogDriver::File => Box::new(ChannelLog::new(
            config.log_channel.clone(),
            config.log_file.clone(),
        )),
        LogDriver::Tracing => Box::new(TracingLog::new(config.log_channel.clone())),
    }
}
