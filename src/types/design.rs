//! The brand icon design.
//!
//! All geometry lives in `IconDesign` so the drawing routine has no scattered
//! literals. The default design is the brand mark: a blue disc with a
//! document, a shield with a checkmark, and a signature.

use super::{Bounds, Colour, Point, ShapeSpec};

/// Colours used by the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignPalette {
    pub background: Colour,
    pub document: Colour,
    pub text: Colour,
    pub shield: Colour,
    pub check: Colour,
    pub signature: Colour,
}

impl Default for DesignPalette {
    fn default() -> Self {
        Self {
            background: Colour::BRAND_BLUE,
            document: Colour::WHITE,
            text: Colour::BRAND_BLUE,
            shield: Colour::SHIELD_GREEN,
            check: Colour::WHITE,
            signature: Colour::SIGNATURE_PURPLE,
        }
    }
}

/// Geometry and colours of the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDesign {
    /// Canvas width and height in pixels.
    pub size: u32,

    /// Document body (inclusive box).
    pub document: Bounds,

    /// Centre of the shield diamond.
    pub shield_center: Point,

    /// Full width/height of the shield diamond.
    pub shield_size: i32,

    /// Baseline of the signature stroke.
    pub signature_y: i32,

    /// Signature stroke thickness.
    pub signature_width: u32,

    pub palette: DesignPalette,
}

impl Default for IconDesign {
    fn default() -> Self {
        Self {
            size: 32,
            document: Bounds::new(8, 6, 20, 22),
            shield_center: Point::new(16, 18),
            shield_size: 6,
            signature_y: 26,
            signature_width: 2,
            palette: DesignPalette::default(),
        }
    }
}

impl IconDesign {
    /// Background disc, inset two pixels from the canvas edge.
    pub fn background(&self) -> Bounds {
        let edge = self.size as i32 - 2;
        Bounds::new(2, 2, edge, edge)
    }

    /// The shapes to draw, in paint order. Later shapes overwrite earlier ones.
    pub fn shapes(&self) -> Vec<ShapeSpec> {
        let doc = self.document;
        let p = &self.palette;
        let mut shapes = Vec::with_capacity(10);

        shapes.push(ShapeSpec::Ellipse {
            bounds: self.background(),
            fill: p.background,
        });

        shapes.push(ShapeSpec::Rectangle {
            bounds: doc,
            fill: p.document,
        });

        // Text lines: the last one is shorter.
        for (dy, inset) in [(3, 2), (6, 2), (9, 4)] {
            shapes.push(ShapeSpec::Line {
                from: Point::new(doc.left + 2, doc.top + dy),
                to: Point::new(doc.right - inset, doc.top + dy),
                width: 1,
                colour: p.text,
            });
        }

        let Point { x: cx, y: cy } = self.shield_center;
        let half = self.shield_size / 2;
        shapes.push(ShapeSpec::Polygon {
            points: vec![
                Point::new(cx, cy - half),
                Point::new(cx + half, cy),
                Point::new(cx, cy + half),
                Point::new(cx - half, cy),
            ],
            fill: p.shield,
        });

        let check = [
            Point::new(cx - 2, cy),
            Point::new(cx - 1, cy + 1),
            Point::new(cx + 2, cy - 2),
        ];
        for pair in check.windows(2) {
            shapes.push(ShapeSpec::Line {
                from: pair[0],
                to: pair[1],
                width: 1,
                colour: p.check,
            });
        }

        let sig = self.signature_y;
        shapes.push(ShapeSpec::Line {
            from: Point::new(doc.left + 2, sig),
            to: Point::new(doc.right - 4, sig),
            width: self.signature_width,
            colour: p.signature,
        });

        shapes.push(ShapeSpec::Ellipse {
            bounds: Bounds::new(doc.right - 2, sig - 1, doc.right, sig + 1),
            fill: p.signature,
        });

        shapes
    }
}
