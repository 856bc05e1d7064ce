//! The `photodex scan` command.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use photodex_core::{write_manifest, Config, ScanConfiguration, ScanResult, Scanner};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Arguments for the `scan` command.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(required = true)]
    pub dir: PathBuf,

    /// Manifest file to write (defaults to `output.file_name` in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path segment names to skip, comma-separated (replaces the configured list)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Recognized extensions, comma-separated (replaces the configured list)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Skip reading pixel dimensions
    #[arg(long)]
    pub no_dimensions: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl ScanArgs {
    /// Build the scanner and scan configuration from config plus overrides.
    pub(crate) fn resolve(&self, config: &Config) -> (Scanner, ScanConfiguration) {
        let mut scan = config.scan.clone();
        if self.no_dimensions {
            scan.read_dimensions = false;
        }

        let mut configuration = ScanConfiguration::new(expand_path(&self.dir), &scan);
        if let Some(extensions) = &self.extensions {
            configuration = configuration.with_extensions(extensions);
        }
        if let Some(exclude) = &self.exclude {
            configuration = configuration.with_exclusions(exclude);
        }

        (Scanner::from_config(&scan), configuration)
    }

    /// Where the manifest goes.
    pub(crate) fn output_path(&self, config: &Config) -> PathBuf {
        self.output
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(|| PathBuf::from(&config.output.file_name))
    }
}

/// Execute the scan command.
pub async fn execute(args: ScanArgs, config: &Config) -> anyhow::Result<()> {
    let (scanner, configuration) = args.resolve(config);
    let output = args.output_path(config);

    let result = run_scan(scanner, configuration, !args.quiet).await?;
    write_manifest(&output, &result, config.output.pretty && !args.compact)?;

    eprintln!(
        "Indexed {} image(s) from {} into {}",
        result.total_images(),
        result.scan_directory(),
        output.display()
    );
    Ok(())
}

/// Run a scan on the blocking pool and hand the result back to the caller.
///
/// The spinner is driven from the scanning thread through the progress
/// callback and cleared before returning.
pub async fn run_scan(
    scanner: Scanner,
    configuration: ScanConfiguration,
    show_progress: bool,
) -> anyhow::Result<ScanResult> {
    let spinner = show_progress.then(create_spinner);
    let progress = spinner.clone();

    let joined = tokio::task::spawn_blocking(move || {
        scanner.scan_with_progress(&configuration, |record| {
            if let Some(pb) = &progress {
                pb.inc(1);
                pb.set_message(record.relative_path.clone());
            }
        })
    })
    .await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(joined.context("Scan task failed")??)
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {pos} image(s) {wide_msg:.dim}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
