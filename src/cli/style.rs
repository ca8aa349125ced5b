use std::path::PathBuf;
use stylecmd::{CommonArgs, Result, StyleSpec};

/// Print text with the requested style
pub fn run(
    common: CommonArgs,
    config_path: Option<PathBuf>,
    text: String,
    fg: Option<String>,
    bg: Option<String>,
    options: Vec<String>,
    markup: bool,
) -> Result<()> {
    let spec = StyleSpec {
        fg,
        bg,
        options: Some(options.into_iter().collect()),
    };

    if markup {
        println!("{}", stylecmd::compose(&text, &spec));
        return Ok(());
    }

    let mut command = super::command("style", common, config_path)?;
    command.output(&text, &spec)
}
