use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::output::LogLevel;

/// Destination for log records, injected into each command
pub trait LogSink {
    fn log(&mut self, level: LogLevel, message: &str) -> Result<()>;
}

/// Named log channel appending to a file
///
/// Records look like `[2024-01-01 09:30:00] commands.WARNING: disk almost full`.
pub struct ChannelLog {
    channel: String,
    path: PathBuf,
}

impl ChannelLog {
    pub fn new(channel: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            channel: channel.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_record(&self, level: LogLevel, message: &str) -> String {
        format!(
            "[{}] {}.{}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.channel,
            level,
            message
        )
    }
}

impl LogSink for ChannelLog {
    fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", self.format_record(level, message))?;
        Ok(())
    }
}

/// Tracing target carrying channel records.
///
/// Records on this target were already gated by the router, so subscribers
/// should enable it at every level.
pub const LOG_TARGET: &str = "stylecmd::log";

/// Log channel forwarding records to `tracing` under [`LOG_TARGET`]
pub struct TracingLog {
    channel: String,
}

impl TracingLog {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl LogSink for TracingLog {
    fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let channel = self.channel.as_str();
        match level {
            LogLevel::Debug => {
                tracing::debug!(target: LOG_TARGET, channel, %level, "{}", message)
            }
            LogLevel::Info | LogLevel::Notice => {
                tracing::info!(target: LOG_TARGET, channel, %level, "{}", message)
            }
            LogLevel::Warning => {
                tracing::warn!(target: LOG_TARGET, channel, %level, "{}", message)
            }
            LogLevel::Error | LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => {
                tracing::error!(target: LOG_TARGET, channel, %level, "{}", message)
            }
        }
        Ok(())
    }
}
