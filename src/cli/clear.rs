use std::path::PathBuf;
use stylecmd::{CommonArgs, Result};

/// Clear the terminal screen
pub fn run(common: CommonArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut command = super::command("clear", common, config_path)?;
    command.clear()
}
