//! Interactive mode — guided experience for bare `photodex` invocation.
//!
//! When `photodex` is invoked with no subcommand on a TTY, this module offers
//! a small menu that drives the same scan and write path as `photodex scan`.

pub mod scan;
pub mod theme;

use console::Style;
use dialoguer::Select;
use photodex_core::Config;
use std::path::Path;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

const MENU_ITEMS: &[&str] = &["Scan a folder", "Show configuration", "Exit"];

/// Entry point for interactive mode.
pub async fn run(config: &Config, config_path: &Path) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::photodex_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => scan::guided_scan(config).await?,
            Some(1) => show_config(config, config_path),
            Some(2) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Print a summary of the effective settings.
fn show_config(config: &Config, config_path: &Path) {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();
    eprintln!(
        "    {:<20} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Extensions:"),
        config.scan.extensions.join(" ")
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Excluded:"),
        config.scan.exclude_dirs.join(" ")
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Dimensions:"),
        if config.scan.read_dimensions { "read" } else { "skipped" }
    );
    eprintln!(
        "    {:<20} {}",
        label.apply_to("Output file:"),
        config.output.file_name
    );
    eprintln!();
}
