//! TTY detection, color support and the stdout console

use std::io::{self, IsTerminal, Write};

use termimad::crossterm::cursor::MoveTo;
use termimad::crossterm::terminal::{Clear, ClearType};
use termimad::crossterm::ExecutableCommand;

use crate::display::markup;
use crate::error::Result;
use crate::output::Console;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    // Priority order:
    // 1. NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // 2. CLICOLOR_FORCE enables colors even when piped
    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    // 3. CLICOLOR=0 disables colors
    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    // 4. Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Console writing rendered markup to stdout
pub struct Terminal {
    colors: bool,
}

impl Terminal {
    /// Terminal with color support detected from the environment
    pub fn new() -> Self {
        Self {
            colors: should_use_colors(),
        }
    }

    pub fn with_colors(colors: bool) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> bool {
        self.colors
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn line(&mut self, markup: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", markup::render(markup, self.colors))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        stdout
            .execute(Clear(ClearType::All))?
            .execute(MoveTo(0, 0))?;
        Ok(())
    }
}
