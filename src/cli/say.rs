use std::path::PathBuf;
use stylecmd::{CommonArgs, Result};

/// Route a message to the terminal and the log
pub fn run(
    common: CommonArgs,
    config_path: Option<PathBuf>,
    message: String,
    level: String,
    force: bool,
) -> Result<()> {
    let mut command = super::command("say", common, config_path)?;
    command.message_named(&message, &level, force)
}
