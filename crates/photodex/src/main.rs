//! Photodex CLI - index a photo collection into a JSON manifest.
//!
//! Photodex walks a folder, picks out image files by extension, reads their
//! pixel dimensions where it can, and writes one JSON document describing
//! everything it found.
//!
//! # Usage
//!
//! ```bash
//! # Scan a folder, writing ./image_index.json
//! photodex scan ~/Pictures
//!
//! # Custom output and exclusions
//! photodex scan ./photos -o index.json --exclude .git,node_modules
//!
//! # Guided mode
//! photodex
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use photodex_core::{Config, ConfigError};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;
mod logging;

/// Photodex - index a photo collection into a JSON manifest.
#[derive(Parser, Debug)]
#[command(name = "photodex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, env = "PHOTODEX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// The config file this invocation reads and writes.
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// `config init` creates the file, so it must not require one to exist.
    fn initializes_config(&self) -> bool {
        use cli::config::ConfigCommand;
        matches!(
            &self.command,
            Some(Commands::Config(args)) if matches!(args.command, ConfigCommand::Init { .. })
        )
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory and write the image manifest
    Scan(cli::scan::ScanArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config_path();

    // Logging isn't initialized yet, so config problems go through eprintln.
    let loaded = if cli.initializes_config() {
        Ok(Config::default())
    } else {
        load_config(cli.config.as_deref())
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Photodex v{}", photodex_core::VERSION);

    let result = match cli.command {
        Some(Commands::Scan(args)) => cli::scan::execute(args, &config).await,
        Some(Commands::Config(args)) => cli::config::execute(args, &config, &config_path).await,
        None if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() => {
            cli::interactive::run(&config, &config_path).await
        }
        None => {
            let _ = Cli::command().print_help();
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Load the effective configuration.
///
/// An explicitly named file must load cleanly. The default location falls
/// back to built-in defaults with a warning, since the user never asked for it.
fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Ok(Config::load().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `photodex config path`."
            );
            Config::default()
        })),
    }
}
