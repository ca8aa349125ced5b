//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - style: Print styled text
//! - say: Route a message to the terminal and the log
//! - ask: Collect a field value
//! - clear: Clear the screen

pub mod ask;
pub mod clear;
pub mod config;
pub mod say;
pub mod style;

use std::path::PathBuf;

use stylecmd::display::Terminal;
use stylecmd::prompt::ProcessInvoker;
use stylecmd::{Command, CommonArgs, Result};

/// Build the command helper wired to the real terminal and configured log
fn command(name: &str, common: CommonArgs, config_path: Option<PathBuf>) -> Result<Command> {
    let config_path =
        config_path.unwrap_or_else(|| PathBuf::from(stylecmd::config::CONFIG_FILE));
    let config = stylecmd::config::load_or_default(&config_path)?;

    let command = Command::new(
        name,
        common,
        Box::new(Terminal::new()),
        stylecmd::config::log_sink(&config),
    );

    // Without a configured program the helper re-runs this executable on demand
    Ok(match config.program {
        Some(program) => command.with_invoker(Box::new(ProcessInvoker::new(program))),
        None => command,
    })
}
