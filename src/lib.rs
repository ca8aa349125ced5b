//! Console command helper
//!
//! Styled terminal markup, dual terminal/log message emission and
//! interactive prompt helpers for command-line tools.

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod output;
pub mod prompt;
pub mod style;

pub use command::{Command, CommonArgs};
pub use error::{CommandError, Result};
pub use output::Severity;
pub use style::{compose, compose_all, Color, StyleOptions, StyleSpec};
