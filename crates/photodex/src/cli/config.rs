//! `photodex config`: inspect or bootstrap the config file.
//!
//! Every subcommand acts on the effective file, meaning `--config` when given
//! and the platform default location otherwise.

use anyhow::Context;
use clap::{Args, Subcommand};
use photodex_core::Config;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration this run would scan with, as TOML
    Show,

    /// Print where the config file is read from
    Path,

    /// Create the config file populated with default settings
    Init {
        /// Replace a file that already exists
        #[arg(long)]
        force: bool,
    },
}

pub async fn execute(args: ConfigArgs, config: &Config, path: &Path) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => print!("{}", config.to_toml()?),
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Init { force } => {
            init_config(path, force)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}

/// Write the default configuration to `path`, creating missing parent
/// directories. An existing file is only replaced when `force` is set.
pub fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if !force && path.exists() {
        anyhow::bail!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let contents = Config::default().to_toml()?;
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!("Config file created at {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("photodex.toml");

        init_config(&path, false).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.file_name, Config::default().output.file_name);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photodex.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photodex.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        init_config(&path, true).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, Config::default().to_toml().unwrap());
    }
}
