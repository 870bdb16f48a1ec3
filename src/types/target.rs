//! Export targets.
//!
//! A target pairs an output file name with the format and pixel size(s)
//! written to it. Every target is derived from the same source canvas.
//!
//! # Standard set
//!
//! ```text
//! favicon-32x32.png            png  32
//! favicon-16x16.png            png  16
//! favicon.ico                  ico  16, 32
//! apple-touch-icon.png         png  180
//! android-chrome-192x192.png   png  192
//! android-chrome-512x512.png   png  512
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// File format and size(s) of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum TargetFormat {
    /// Single-size PNG.
    Png { size: u32 },
    /// ICO container with one embedded image per size.
    Ico { sizes: Vec<u32> },
}

impl TargetFormat {
    /// Format name as used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            TargetFormat::Png { .. } => "png",
            TargetFormat::Ico { .. } => "ico",
        }
    }

    /// All pixel sizes this format embeds.
    pub fn sizes(&self) -> Vec<u32> {
        match self {
            TargetFormat::Png { size } => vec![*size],
            TargetFormat::Ico { sizes } => sizes.clone(),
        }
    }
}

/// A single output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTarget {
    /// File name relative to the output directory.
    pub file_name: String,

    #[serde(flatten)]
    pub format: TargetFormat,
}

impl ExportTarget {
    /// Create a PNG target.
    pub fn png(file_name: impl Into<String>, size: u32) -> Self {
        Self {
            file_name: file_name.into(),
            format: TargetFormat::Png { size },
        }
    }

    /// Create an ICO target embedding the given sizes.
    pub fn ico(file_name: impl Into<String>, sizes: &[u32]) -> Self {
        Self {
            file_name: file_name.into(),
            format: TargetFormat::Ico {
                sizes: sizes.to_vec(),
            },
        }
    }

    /// The six web and mobile icon files, in write order.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::png("favicon-32x32.png", 32),
            Self::png("favicon-16x16.png", 16),
            Self::ico("favicon.ico", &[16, 32]),
            Self::png("apple-touch-icon.png", 180),
            Self::png("android-chrome-192x192.png", 192),
            Self::png("android-chrome-512x512.png", 512),
        ]
    }

    /// Output path of this target inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: Vec<String> = self
            .format
            .sizes()
            .iter()
            .map(|s| format!("{s}x{s}"))
            .collect();
        write!(f, "{} ({})", self.file_name, sizes.join(", "))
    }
}
