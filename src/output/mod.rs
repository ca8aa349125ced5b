//! Message routing module
//!
//! Decides whether a message reaches the terminal, the log sink, both or
//! neither, and which writer each target uses for a given severity.

mod severity;
mod sink;

pub use severity::{ConsoleLevel, LogLevel, Severity};
pub use sink::{ChannelLog, LogSink, TracingLog, LOG_TARGET};

use crate::error::Result;

/// Terminal target for rendered markup lines
pub trait Console {
    fn line(&mut self, markup: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Routes messages according to the verbose flag and a per-call force override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageRouter {
    verbose: bool,
}

impl MessageRouter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether a message is emitted; dropped messages are not buffered
    pub fn allows(&self, force: bool) -> bool {
        self.verbose || force
    }

    /// Write `message` to the terminal, returns whether anything was written
    pub fn to_console(
        &self,
        console: &mut dyn Console,
        message: &str,
        severity: Severity,
        force: bool,
    ) -> Result<bool> {
        if !self.allows(force) {
            return Ok(false);
        }

        for line in severity.console_level().lines(message) {
            console.line(&line)?;
        }
        Ok(true)
    }

    /// Write `message` to the log sink, returns whether anything was written
    pub fn to_log(
        &self,
        sink: &mut dyn LogSink,
        message: &str,
        severity: Severity,
        force: bool,
    ) -> Result<bool> {
        if !self.allows(force) {
            return Ok(false);
        }

        sink.log(severity.log_level(), message)?;
        Ok(true)
    }

    /// Write `message` to both targets
    pub fn emit(
        &self,
        console: &mut dyn Console,
        sink: &mut dyn LogSink,
        message: &str,
        severity: Severity,
        force: bool,
    ) -> Result<()> {
        let printed = self.to_console(console, message, severity, force)?;
        let logged = self.to_log(sink, message, severity, force)?;
        tracing::debug!(?severity, force, printed, logged, "message routed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Console recording every line and clear request
    #[derive(Clone, Default)]
    pub struct RecordingConsole {
        pub lines: Rc<RefCell<Vec<String>>>,
        pub clears: Rc<RefCell<usize>>,
    }

    impl Console for RecordingConsole {
        fn line(&mut self, markup: &str) -> Result<()> {
            self.lines.borrow_mut().push(markup.to_string());
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            *self.clears.borrow_mut() += 1;
            Ok(())
        }
    }

    /// Log sink recording every record
    #[derive(Clone, Default)]
    pub struct RecordingLog {
        pub records: Rc<RefCell<Vec<(LogLevel, String)>>>,
    }

    impl LogSink for RecordingLog {
        fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
            self.records.borrow_mut().push((level, message.to_string()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{RecordingConsole, RecordingLog};
    use super::*;

    fn route(
        verbose: bool,
        severity: Severity,
        force: bool,
    ) -> (Vec<String>, Vec<(LogLevel, String)>) {
        let mut console = RecordingConsole::default();
        let mut log = RecordingLog::default();
        MessageRouter::new(verbose)
            .emit(&mut console, &mut log, "msg", severity, force)
            .unwrap();
        let lines = console.lines.borrow().clone();
        let records = log.records.borrow().clone();
        (lines, records)
    }

    #[test]
    fn test_allows() {
        assert!(!MessageRouter::new(false).allows(false));
        assert!(MessageRouter::new(false).allows(true));
        assert!(MessageRouter::new(true).allows(false));
    }

    #[test]
    fn test_quiet_without_force_is_noop() {
        let (lines, records) = route(false, Severity::Warning, false);
        assert!(lines.is_empty());
        assert!(records.is_empty());
    }

    #[test]
    fn test_verbose_error_writes_once_each() {
        let (lines, records) = route(true, Severity::Error, false);
        assert_eq!(lines, vec!["<error>msg</error>".to_string()]);
        assert_eq!(records, vec![(LogLevel::Error, "msg".to_string())]);
    }

    #[test]
    fn test_unknown_severity_behaves_like_info() {
        let unknown = route(false, Severity::from_name("bogus-severity"), true);
        let info = route(false, Severity::from_name("info"), true);
        assert_eq!(unknown, info);
        assert_eq!(info.1, vec![(LogLevel::Info, "msg".to_string())]);
    }

    #[test]
    fn test_force_overrides_quiet() {
        let (lines, records) = route(false, Severity::Warning, true);
        assert_eq!(lines, vec!["<fg=Yellow>msg</></>".to_string()]);
        assert_eq!(records, vec![(LogLevel::Warning, "msg".to_string())]);
    }

    #[test]
    fn test_to_log_reports_dropped() {
        let mut log = RecordingLog::default();
        let written = MessageRouter::new(false)
            .to_log(&mut log, "msg", Severity::Info, false)
            .unwrap();
        assert!(!written);
        assert!(log.records.borrow().is_empty());
    }
}
