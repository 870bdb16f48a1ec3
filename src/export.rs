//! Writing the finished canvas out as a set of targets.
//!
//! Targets are processed strictly in order and each one is resampled from
//! the same source canvas. What happens after a failed write depends on the
//! `FailurePolicy`.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Deserialize;

use crate::error::{IconError, Result};
use crate::render::{write_ico, write_png};
use crate::types::{ExportTarget, TargetFormat};

/// What to do when a target cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed target and return its error.
    #[default]
    Abort,
    /// Attempt every target and report failures at the end.
    Continue,
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Paths written successfully, in target order.
    pub written: Vec<PathBuf>,

    /// Paths that could not be written, with the reason.
    pub failed: Vec<(PathBuf, IconError)>,
}

impl ExportReport {
    /// Check whether every target was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of targets attempted.
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Write a single target from the source canvas.
pub fn export_target(source: &RgbaImage, target: &ExportTarget, path: &Path) -> Result<()> {
    match &target.format {
        TargetFormat::Png { size } => write_png(source, *size, path),
        TargetFormat::Ico { sizes } => write_ico(source, sizes, path),
    }
}

/// Write every target into `output_dir`, creating the directory if needed.
///
/// `on_written` is called after each successful write. Existing files are
/// overwritten. With `FailurePolicy::Abort` the first failure is returned as
/// the error; with `FailurePolicy::Continue` failures are collected in the
/// report.
pub fn export_all(
    source: &RgbaImage,
    output_dir: &Path,
    targets: &[ExportTarget],
    policy: FailurePolicy,
    mut on_written: impl FnMut(&ExportTarget, &Path),
) -> Result<ExportReport> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| IconError::Io {
            path: output_dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut report = ExportReport::default();

    for target in targets {
        let path = target.path_in(output_dir);
        match export_target(source, target, &path) {
            Ok(()) => {
                on_written(target, &path);
                report.written.push(path);
            }
            Err(e) => match policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Continue => report.failed.push((path, e)),
            },
        }
    }

    Ok(report)
}
