//! Targets command implementation.
//!
//! Prints the export targets, either as a table or as JSON on stdout.

use clap::Args;

use crate::error::{IconError, Result};
use crate::output::{plural, Printer};
use crate::types::ExportTarget;

/// List the files that `generate` writes
#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TargetsArgs, printer: &Printer) -> Result<()> {
    let targets = ExportTarget::standard();

    if args.json {
        let json = serde_json::to_string_pretty(&targets).map_err(|e| IconError::Config {
            message: format!("Failed to serialize targets: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    printer.info("Targets", &plural(targets.len(), "file", "files"));
    println!("{}", format_table(&targets));

    Ok(())
}

/// Render targets as aligned `name  format  sizes` rows.
pub fn format_table(targets: &[ExportTarget]) -> String {
    let width = targets
        .iter()
        .map(|t| t.file_name.len())
        .max()
        .unwrap_or(0);

    targets
        .iter()
        .map(|t| {
            let sizes: Vec<String> = t.format.sizes().iter().map(u32::to_string).collect();
            format!(
                "{:<width$}  {}  {}",
                t.file_name,
                t.format.name(),
                sizes.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        insta::assert_snapshot!(format_table(&ExportTarget::standard()), @r###"
        favicon-32x32.png           png  32
        favicon-16x16.png           png  16
        favicon.ico                 ico  16, 32
        apple-touch-icon.png        png  180
        android-chrome-192x192.png  png  192
        android-chrome-512x512.png  png  512
        "###);
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[]), "");
    }
}
