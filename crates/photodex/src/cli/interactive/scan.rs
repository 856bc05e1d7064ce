//! Guided scan flow: pick a folder, scan it off the prompt task, write the
//! manifest into the folder and show what was found.

use console::Style;
use dialoguer::{Input, Select};
use photodex_core::{write_manifest, Config, ScanResult, Scanner};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::theme::photodex_theme;
use crate::cli::scan::{expand_path, run_scan};

/// Walk the user through one or more scans.
pub async fn guided_scan(config: &Config) -> anyhow::Result<()> {
    let theme = photodex_theme();

    loop {
        let Some(root) = prompt_directory(&theme)? else {
            return Ok(());
        };

        match scan_and_write(config, &root).await {
            Ok((result, output)) => eprint!("{}", render_summary(&result, &output)),
            Err(e) => {
                tracing::error!("Scan failed: {e:#}");
                let red = Style::new().for_stderr().red();
                eprintln!("  {} {e:#}", red.apply_to("✗"));
            }
        }

        eprintln!();
        let next = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&["Scan another folder", "Back to main menu"])
            .default(0)
            .interact_opt()?;

        if !matches!(next, Some(0)) {
            return Ok(());
        }
    }
}

/// Ask for a directory until an existing one is given. `None` on interrupt.
fn prompt_directory(
    theme: &dialoguer::theme::ColorfulTheme,
) -> anyhow::Result<Option<PathBuf>> {
    loop {
        let Some(raw) = super::handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Folder to scan")
                .interact_text(),
        )?
        else {
            return Ok(None);
        };

        let path = expand_path(Path::new(raw.trim()));
        if path.is_dir() {
            return Ok(Some(path));
        }

        let warn = Style::new().for_stderr().yellow();
        eprintln!(
            "  {}",
            warn.apply_to(format!("Please select an existing directory: {}", path.display()))
        );
    }
}

/// Scan `root` on the blocking pool, then write the manifest inside it.
async fn scan_and_write(
    config: &Config,
    root: &Path,
) -> anyhow::Result<(ScanResult, PathBuf)> {
    let scanner = Scanner::from_config(&config.scan);
    let result = run_scan(scanner, config.scan_configuration(root), true).await?;

    let output = Path::new(result.scan_directory()).join(&config.output.file_name);
    write_manifest(&output, &result, config.output.pretty)?;
    Ok((result, output))
}

/// Human-readable summary with a numbered list of relative paths.
fn render_summary(result: &ScanResult, output: &Path) -> String {
    let mut text = String::new();
    let _ = writeln!(text);
    let _ = writeln!(text, "Scan Summary:");
    let _ = writeln!(text, "  Total Images: {}", result.total_images());
    let _ = writeln!(text, "  Scan Directory: {}", result.scan_directory());
    let _ = writeln!(text, "  JSON Output File: {}", output.display());
    let _ = writeln!(text, "{}", "-".repeat(40));
    let _ = writeln!(text, "Found Images:");
    for (i, image) in result.images().iter().enumerate() {
        let _ = writeln!(text, "{}. {}", i + 1, image.relative_path);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use photodex_core::ImageRecord;

    #[test]
    fn test_render_summary_numbers_images() {
        let result = ScanResult::assemble(
            Path::new("/photos"),
            vec![
                ImageRecord::new("a.jpg", "a.jpg"),
                ImageRecord::new("d.png", "sub/d.png"),
            ],
        );
        let text = render_summary(&result, Path::new("/photos/image_index.json"));

        assert!(text.contains("Total Images: 2"));
        assert!(text.contains("Scan Directory: /photos"));
        assert!(text.contains("JSON Output File: /photos/image_index.json"));
        assert!(text.contains("1. a.jpg\n2. sub/d.png\n"));
    }

    #[tokio::test]
    async fn test_scan_and_write_puts_manifest_in_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.gif"), b"gif-ish").unwrap();

        let (result, output) = scan_and_write(&Config::default(), dir.path())
            .await
            .unwrap();

        assert_eq!(result.total_images(), 1);
        assert_eq!(output.file_name().unwrap(), "image_index.json");
        assert!(output.starts_with(result.scan_directory()));
        assert!(output.is_file());
    }
}
