//! Generate command implementation.
//!
//! Draws the brand icon and writes the favicon and app icon set.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::export::{export_all, FailurePolicy};
use crate::output::{display_path, plural, Printer};
use crate::preflight::ensure_codecs;
use crate::render::build_icon;
use crate::types::{ExportTarget, IconDesign};

/// Draw the icon and write the favicon and app icon files
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output directory (default: `public`, or `output` from icongen.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ./icongen.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep writing the remaining files after one fails
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    generate(args, Path::new("."), printer)
}

/// Run the generator, looking for icongen.yaml in `config_dir`.
pub fn generate(args: GenerateArgs, config_dir: &Path, printer: &Printer) -> Result<()> {
    generate_with(args, config_dir, printer, ensure_codecs)
}

/// Run the generator with a custom codec check.
///
/// `preflight` runs before the config is read; nothing is drawn or written
/// when it fails.
pub fn generate_with(
    args: GenerateArgs,
    config_dir: &Path,
    printer: &Printer,
    preflight: impl FnOnce() -> Result<()>,
) -> Result<()> {
    preflight()?;

    let config = Config::resolve(args.config.as_deref(), config_dir)?;
    let output = args.output.unwrap_or(config.output);
    let policy = if args.keep_going {
        FailurePolicy::Continue
    } else {
        config.on_error
    };

    let design = IconDesign::default();
    printer.status(
        "Creating",
        &format!("brand icon ({}x{})", design.size, design.size),
    );
    let icon = build_icon(&design);

    let targets = ExportTarget::standard();
    let report = export_all(&icon, &output, &targets, policy, |_, path| {
        printer.success("Created", &display_path(path));
    })?;

    for (path, err) in &report.failed {
        printer.error("Failed", &format!("{}: {}", display_path(path), err));
    }

    if !report.is_complete() {
        return Err(IconError::Export {
            failed: report.failed.len(),
            total: report.attempted(),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(report.written.len(), "icon file", "icon files"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(())
}
