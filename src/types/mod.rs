//! Core domain types for icongen.
//!
//! This module contains the fundamental types used throughout the generator:
//! - `Colour` - RGBA colour values
//! - `ShapeSpec` - Drawing primitives
//! - `IconDesign` - Geometry and colours of the brand icon
//! - `ExportTarget` - Output files and their sizes

mod colour;
mod design;
mod shape;
mod target;

pub use colour::Colour;
pub use design::{DesignPalette, IconDesign};
pub use shape::{Bounds, Point, ShapeSpec};
pub use target::{ExportTarget, TargetFormat};
