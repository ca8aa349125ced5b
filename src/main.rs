mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stylecmd::output::LOG_TARGET;
use stylecmd::CommonArgs;
use tracing_subscriber::EnvFilter;

use crate::cli::ask::FieldType;

#[derive(Parser)]
#[command(name = "stylecmd")]
#[command(about = "Styled console output, message routing and prompts", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Path to config file (defaults to stylecmd.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print text with a style
    Style {
        /// Text to print
        text: String,

        /// Foreground color
        #[arg(long)]
        fg: Option<String>,

        /// Background color
        #[arg(long)]
        bg: Option<String>,

        /// Display option (bold, underscore, ...), repeatable
        #[arg(long = "option")]
        options: Vec<String>,

        /// Print the markup instead of rendering it
        #[arg(long)]
        markup: bool,
    },
    /// Emit a message to the terminal and the log
    Say {
        /// Message to emit
        message: String,

        /// Severity name (info, warning, error, ...)
        #[arg(long, default_value = "info")]
        level: String,

        /// Emit even without --verbose
        #[arg(long)]
        force: bool,
    },
    /// Ask for a field value and print it
    Ask {
        /// Field label
        label: String,

        /// How the value is collected
        #[arg(long, value_enum, default_value_t = FieldType::Text)]
        kind: FieldType,

        /// Choices separated by '|' or the sub-command line to run
        #[arg(long)]
        options: Option<String>,

        /// Pattern whose first capture group is kept from sub-command output
        #[arg(long)]
        pattern: Option<String>,

        /// Current value, kept unless the user chooses to change it
        #[arg(long)]
        value: Option<String>,
    },
    /// Clear the terminal screen
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize stylecmd.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    // Channel records are gated by the router, diagnostics default to warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=trace", LOG_TARGET)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let common = cli.common;
    let config = cli.config;

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Style {
            text,
            fg,
            bg,
            options,
            markup,
        } => cli::style::run(common, config, text, fg, bg, options, markup),
        Commands::Say {
            message,
            level,
            force,
        } => cli::say::run(common, config, message, level, force),
        Commands::Ask {
            label,
            kind,
            options,
            pattern,
            value,
        } => cli::ask::run(common, config, label, kind, options, pattern, value),
        Commands::Clear => cli::clear::run(common, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
