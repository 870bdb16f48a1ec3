//! Check command implementation.
//!
//! Verifies that an output directory holds a complete, correctly sized icon set.

use std::path::PathBuf;

use clap::Args;

use crate::check::check_output;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::ExportTarget;

/// Verify a generated output directory
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory to check
    #[arg(default_value = "public")]
    pub dir: PathBuf,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let targets = ExportTarget::standard();
    printer.status("Checking", &display_path(&args.dir));

    let findings = check_output(&args.dir, &targets);
    for finding in &findings {
        printer.error(
            "Problem",
            &format!("{} {}", display_path(finding.path()), printer.dim(&finding.to_string())),
        );
    }

    if !findings.is_empty() {
        return Err(IconError::Check {
            problems: findings.len(),
        });
    }

    printer.success(
        "Verified",
        &plural(targets.len(), "icon file", "icon files"),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_missing_output() {
        let dir = tempdir().unwrap();
        let args = CheckArgs {
            dir: dir.path().join("public"),
        };

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, IconError::Check { problems: 6 }));
    }
}
