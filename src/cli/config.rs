use std::path::PathBuf;
use stylecmd::config::{self, Config, CONFIG_FILE};
use stylecmd::Result;

/// Initialize stylecmd.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to choose the log channel and log file",
        config_path.display()
    );
    println!("2. Run 'stylecmd say \"hello\" --force' to emit your first message");

    Ok(())
}
