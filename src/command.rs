//! Command helper
//!
//! Bundles the terminal, the log sink, the prompter and the sub-command
//! invoker a command works with, and exposes the styled output, message
//! routing and form helpers on top of them.

use clap::Args;

use crate::error::Result;
use crate::output::{Console, LogSink, MessageRouter, Severity};
use crate::prompt::{self, DialogPrompter, Field, FieldKind, Invoker, ProcessInvoker, Prompter};
use crate::style::{self, Color, StyleSpec};

/// Options every command accepts
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Print messages and write them to the log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Display output in log file
    #[arg(short, long, global = true)]
    pub log: bool,
}

/// Console command with styled output, message routing and prompts
pub struct Command {
    name: String,
    args: CommonArgs,
    router: MessageRouter,
    console: Box<dyn Console>,
    sink: Box<dyn LogSink>,
    prompter: Box<dyn Prompter>,
    invoker: Option<Box<dyn Invoker>>,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        args: CommonArgs,
        console: Box<dyn Console>,
        sink: Box<dyn LogSink>,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            router: MessageRouter::new(args.verbose),
            console,
            sink,
            prompter: Box::new(DialogPrompter::new()),
            invoker: None,
        }
    }

    pub fn with_prompter(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.prompter = prompter;
        self
    }

    pub fn with_invoker(mut self, invoker: Box<dyn Invoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> CommonArgs {
        self.args
    }

    /// Whether `--log` was passed.
    ///
    /// Emission is gated on `--verbose` and `force` only; this flag is
    /// exposed for commands that want to act on it themselves.
    pub fn log_requested(&self) -> bool {
        self.args.log
    }

    /// Print `message` and write it to the log when verbose or forced
    pub fn message(&mut self, message: &str, severity: Severity, force: bool) -> Result<()> {
        self.router.emit(
            self.console.as_mut(),
            self.sink.as_mut(),
            message,
            severity,
            force,
        )
    }

    /// Like [`Command::message`] with the severity given by name
    pub fn message_named(&mut self, message: &str, severity: &str, force: bool) -> Result<()> {
        self.message(message, Severity::from_name(severity), force)
    }

    /// Write `message` to the log only
    pub fn log(&mut self, message: &str, severity: Severity, force: bool) -> Result<()> {
        self.router.to_log(self.sink.as_mut(), message, severity, force)?;
        Ok(())
    }

    /// Style markup for `text`
    pub fn style(&self, text: &str, spec: &StyleSpec) -> String {
        style::compose(text, spec)
    }

    /// Print `text` with a style
    pub fn output(&mut self, text: &str, spec: &StyleSpec) -> Result<()> {
        let markup = style::compose(text, spec);
        self.console.line(&format!("{}</>", markup))
    }

    /// Print several differently styled spans on one line
    pub fn output_all<S: AsRef<str>>(&mut self, entries: &[(S, StyleSpec)]) -> Result<()> {
        let markup = style::compose_all(entries);
        self.console.line(&format!("{}</>", markup))
    }

    /// Print `message` in yellow
    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.output(message, &StyleSpec::new().fg(Color::Yellow))
    }

    /// Collect a value for the field labelled `label`
    ///
    /// Without an injected invoker, invoke fields re-run the current
    /// executable; other kinds never look one up.
    pub fn form(&mut self, label: &str, field: &Field) -> Result<String> {
        if matches!(field.kind, FieldKind::Invoke { .. }) && self.invoker.is_none() {
            self.invoker = Some(Box::new(ProcessInvoker::current()?));
        }

        let invoker: Option<&mut dyn Invoker> = match self.invoker.as_mut() {
            Some(invoker) => Some(invoker.as_mut()),
            None => None,
        };
        prompt::form(label, field, self.prompter.as_mut(), invoker)
    }

    /// Clear the terminal screen
    pub fn clear(&mut self) -> Result<()> {
        self.console.clear()
    }
}
