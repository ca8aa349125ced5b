use std::path::PathBuf;
use std::process::Command as Process;

use crate::error::{CommandError, Result};

/// Runs another named sub-command and captures its output
pub trait Invoker {
    fn call(&mut self, command: &str) -> Result<String>;
}

/// Invoker spawning `program` with the command line as its arguments
pub struct ProcessInvoker {
    program: PathBuf,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Invoker calling back into the running executable
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }
}

impl Invoker for ProcessInvoker {
    fn call(&mut self, command: &str) -> Result<String> {
        let args = shlex::split(command).ok_or_else(|| {
            CommandError::Invoke(format!("Cannot parse command line '{}'", command))
        })?;

        tracing::debug!(program = ?self.program, ?args, "invoking sub-command");

        let output = Process::new(&self.program).args(&args).output()?;

        if !output.status.success() {
            return Err(CommandError::Invoke(format!(
                "'{}' exited with {}: {}",
                command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
