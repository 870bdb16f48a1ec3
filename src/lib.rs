//! icongen - Brand icon and favicon set generator
//!
//! Draws the brand mark on a small RGBA canvas and exports it as the
//! favicon, ICO and mobile home-screen icon files a website needs.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod preflight;
pub mod render;
pub mod types;

pub use check::{check_output, CheckFinding};
pub use config::Config;
pub use error::{IconError, Result};
pub use export::{export_all, ExportReport, FailurePolicy};
pub use preflight::ensure_codecs;
pub use render::{build_icon, read_ico_sizes, resize, write_ico, write_png, Canvas};
pub use types::{Bounds, Colour, ExportTarget, IconDesign, Point, ShapeSpec, TargetFormat};
