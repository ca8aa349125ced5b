use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log record destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDriver {
    /// Append records to `log_file`
    #[default]
    File,
    /// Forward records to tracing
    Tracing,
}

/// Command helper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the log channel written into each record
    pub log_channel: String,

    /// Where log records go
    pub log_driver: LogDriver,

    /// File receiving log records with the `file` driver
    pub log_file: PathBuf,

    /// Program run for sub-command fields (defaults to this executable)
    pub program: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_channel: "commands".to_string(),
            log_driver: LogDriver::File,
            log_file: PathBuf::from("./storage/logs/commands.log"),
            program: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_channel, "commands");
        assert_eq!(config.log_driver, LogDriver::File);
        assert_eq!(config.log_file, PathBuf::from("./storage/logs/commands.log"));
        assert!(config.program.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.log_channel, "commands");
        assert_eq!(parsed.log_file, config.log_file);
        assert!(toml.contains("log_driver = \"file\""));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("log_channel = \"deploy\"").unwrap();
        assert_eq!(parsed.log_channel, "deploy");
        assert_eq!(parsed.log_driver, LogDriver::File);
    }

    #[test]
    fn test_tracing_driver() {
        let parsed: Config = toml::from_str("log_driver = \"tracing\"").unwrap();
        assert_eq!(parsed.log_driver, LogDriver::Tracing);
        assert_eq!(parsed.log_channel, "commands");
    }
}
