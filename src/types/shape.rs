//! Drawing instructions.
//!
//! A `ShapeSpec` is a single primitive with its geometry and colour. Shapes
//! are consumed by `Canvas::draw` and are not retained afterwards.

use super::Colour;

/// A pixel position. Pixel (x, y) has its centre at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Check whether a pixel lies inside the box (edges included).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    /// Filled ellipse inscribed in `bounds`.
    Ellipse { bounds: Bounds, fill: Colour },

    /// Filled axis-aligned rectangle.
    Rectangle { bounds: Bounds, fill: Colour },

    /// Straight line segment, `width` pixels thick.
    Line {
        from: Point,
        to: Point,
        width: u32,
        colour: Colour,
    },

    /// Filled polygon; the last point joins back to the first.
    Polygon { points: Vec<Point>, fill: Colour },
}

impl ShapeSpec {
    /// Short name of the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeSpec::Ellipse { .. } => "ellipse",
            ShapeSpec::Rectangle { .. } => "rectangle",
            ShapeSpec::Line { .. } => "line",
            ShapeSpec::Polygon { .. } => "polygon",
        }
    }

    /// The colour this shape paints with.
    pub fn colour(&self) -> Colour {
        match self {
            ShapeSpec::Ellipse { fill, .. }
            | ShapeSpec::Rectangle { fill, .. }
            | ShapeSpec::Polygon { fill, .. } => *fill,
            ShapeSpec::Line { colour, .. } => *colour,
        }
    }
}
