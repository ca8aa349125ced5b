use std::fmt;

use crate::display;
use crate::style::{self, Color, StyleSpec};

/// Message importance level
///
/// `Info`, `Warning` and `Error` are the everyday levels. The others exist
/// on only one of the two targets and fall back to `Info` on the other;
/// `Line` is unstyled terminal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Comment,
    Question,
    Alert,
    Debug,
    Notice,
    Critical,
    Emergency,
    Line,
}

impl Severity {
    /// Look up a severity by name, `None` when unknown
    pub fn parse(name: &str) -> Option<Self> {
        let severity = match name.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "warning" | "warn" => Severity::Warning,
            "error" => Severity::Error,
            "comment" => Severity::Comment,
            "question" => Severity::Question,
            "alert" => Severity::Alert,
            "debug" => Severity::Debug,
            "notice" => Severity::Notice,
            "critical" => Severity::Critical,
            "emergency" => Severity::Emergency,
            "line" => Severity::Line,
            _ => return None,
        };
        Some(severity)
    }

    /// Look up a severity by name, unknown names become `Info`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(Severity::Info)
    }

    /// Terminal writer for this severity
    pub fn console_level(self) -> ConsoleLevel {
        match self {
            Severity::Info => ConsoleLevel::Info,
            Severity::Warning => ConsoleLevel::Warning,
            Severity::Error => ConsoleLevel::Error,
            Severity::Comment => ConsoleLevel::Comment,
            Severity::Question => ConsoleLevel::Question,
            Severity::Alert => ConsoleLevel::Alert,
            Severity::Line => ConsoleLevel::Line,
            Severity::Debug | Severity::Notice | Severity::Critical | Severity::Emergency => {
                ConsoleLevel::Info
            }
        }
    }

    /// Log writer for this severity
    pub fn log_level(self) -> LogLevel {
        match self {
            Severity::Info => LogLevel::Info,
            Severity::Warning => LogLevel::Warning,
            Severity::Error => LogLevel::Error,
            Severity::Alert => LogLevel::Alert,
            Severity::Debug => LogLevel::Debug,
            Severity::Notice => LogLevel::Notice,
            Severity::Critical => LogLevel::Critical,
            Severity::Emergency => LogLevel::Emergency,
            Severity::Comment | Severity::Question | Severity::Line => LogLevel::Info,
        }
    }
}

/// The ways a message can be written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Line,
    Info,
    Comment,
    Question,
    Warning,
    Error,
    Alert,
}

impl ConsoleLevel {
    /// Markup lines written for `message`
    pub fn lines(self, message: &str) -> Vec<String> {
        match self {
            ConsoleLevel::Line => vec![message.to_string()],
            ConsoleLevel::Info => vec![format!("<info>{}</info>", message)],
            ConsoleLevel::Comment => vec![format!("<comment>{}</comment>", message)],
            ConsoleLevel::Question => vec![format!("<question>{}</question>", message)],
            ConsoleLevel::Error => vec![format!("<error>{}</error>", message)],
            ConsoleLevel::Warning => {
                let spec = StyleSpec::new().fg(Color::Yellow);
                vec![format!("{}</>", style::compose(message, &spec))]
            }
            ConsoleLevel::Alert => {
                let width = display::render(message, false).chars().count() + 12;
                let border = format!("<comment>{}</comment>", "*".repeat(width));
                vec![
                    border.clone(),
                    format!("<comment>*     {}     *</comment>", message),
                    border,
                    String::new(),
                ]
            }
        }
    }
}

/// Log record levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Alert => "ALERT",
            LogLevel::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Severity::parse("info"), Some(Severity::Info));
        assert_eq!(Severity::parse("Warning"), Some(Severity::Warning));
        assert_eq!(Severity::parse(" error "), Some(Severity::Error));
        assert_eq!(Severity::parse("bogus-severity"), None);
    }

    #[test]
    fn test_parse_warn_alias() {
        assert_eq!(Severity::parse("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("WARN").log_level(), LogLevel::Warning);
        assert_eq!(Severity::from_name("warn").console_level(), ConsoleLevel::Warning);
    }

    #[test]
    fn test_line_is_plain_text_logged_as_info() {
        let line = Severity::from_name("line");
        assert_eq!(line, Severity::Line);
        assert_eq!(line.console_level(), ConsoleLevel::Line);
        assert_eq!(line.log_level(), LogLevel::Info);
        assert_eq!(
            ConsoleLevel::Line.lines("<b>as is"),
            vec!["<b>as is".to_string()]
        );
    }

    #[test]
    fn test_from_name_falls_back_to_info() {
        assert_eq!(Severity::from_name("bogus-severity"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
    }

    #[test]
    fn test_targets_resolve_independently() {
        // debug only exists on the log side
        assert_eq!(Severity::Debug.console_level(), ConsoleLevel::Info);
        assert_eq!(Severity::Debug.log_level(), LogLevel::Debug);

        // comment only exists on the terminal side
        assert_eq!(Severity::Comment.console_level(), ConsoleLevel::Comment);
        assert_eq!(Severity::Comment.log_level(), LogLevel::Info);

        // alert exists on both
        assert_eq!(Severity::Alert.console_level(), ConsoleLevel::Alert);
        assert_eq!(Severity::Alert.log_level(), LogLevel::Alert);
    }

    #[test]
    fn test_warning_lines_use_yellow_output() {
        assert_eq!(
            ConsoleLevel::Warning.lines("careful"),
            vec!["<fg=Yellow>careful</></>".to_string()]
        );
    }

    #[test]
    fn test_error_lines() {
        assert_eq!(
            ConsoleLevel::Error.lines("boom"),
            vec!["<error>boom</error>".to_string()]
        );
    }

    #[test]
    fn test_alert_box() {
        let lines = ConsoleLevel::Alert.lines("Hi");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("<comment>{}</comment>", "*".repeat(14)));
        assert_eq!(lines[1], "<comment>*     Hi     *</comment>");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert!(LogLevel::Debug < LogLevel::Emergency);
    }
}
