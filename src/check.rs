//! Verification of a generated output directory.
//!
//! Confirms that each target exists, is non-empty, and decodes to the sizes
//! it declares.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::read_ico_sizes;
use crate::types::{ExportTarget, TargetFormat};

/// A problem found with one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFinding {
    Missing { path: PathBuf },
    Empty { path: PathBuf },
    Unreadable { path: PathBuf, message: String },
    WrongSize {
        path: PathBuf,
        expected: Vec<(u32, u32)>,
        actual: Vec<(u32, u32)>,
    },
}

impl CheckFinding {
    pub fn path(&self) -> &Path {
        match self {
            CheckFinding::Missing { path }
            | CheckFinding::Empty { path }
            | CheckFinding::Unreadable { path, .. }
            | CheckFinding::WrongSize { path, .. } => path,
        }
    }
}

impl fmt::Display for CheckFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFinding::Missing { .. } => write!(f, "file is missing"),
            CheckFinding::Empty { .. } => write!(f, "file is empty"),
            CheckFinding::Unreadable { message, .. } => write!(f, "cannot decode: {}", message),
            CheckFinding::WrongSize {
                expected, actual, ..
            } => write!(f, "expected {}, found {}", sizes(expected), sizes(actual)),
        }
    }
}

fn sizes(list: &[(u32, u32)]) -> String {
    list.iter()
        .map(|(w, h)| format!("{w}x{h}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check every target in `dir`. An empty result means the output is complete.
pub fn check_output(dir: &Path, targets: &[ExportTarget]) -> Vec<CheckFinding> {
    targets
        .iter()
        .filter_map(|target| check_target(dir, target))
        .collect()
}

fn check_target(dir: &Path, target: &ExportTarget) -> Option<CheckFinding> {
    let path = target.path_in(dir);

    let meta = match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => meta,
        _ => return Some(CheckFinding::Missing { path }),
    };
    if meta.len() == 0 {
        return Some(CheckFinding::Empty { path });
    }

    let actual = match &target.format {
        TargetFormat::Png { .. } => image::image_dimensions(&path)
            .map(|dims| vec![dims])
            .map_err(|e| e.to_string()),
        TargetFormat::Ico { .. } => read_ico_sizes(&path).map_err(|e| e.to_string()),
    };

    let expected: Vec<(u32, u32)> = target.format.sizes().iter().map(|&s| (s, s)).collect();
    match actual {
        Err(message) => Some(CheckFinding::Unreadable { path, message }),
        Ok(actual) if actual != expected => Some(CheckFinding::WrongSize {
            path,
            expected,
            actual,
        }),
        Ok(_) => None,
    }
}
