//! Raster canvas - draws shapes into an RGBA pixel buffer.
//!
//! Pixels are painted opaquely: a later shape replaces whatever an earlier
//! shape left underneath it. Anything outside the canvas is clipped.

use image::{Rgba, RgbaImage};

use crate::types::{Bounds, Colour, Point, ShapeSpec};

/// A mutable RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Colour::TRANSPARENT.into()),
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[cfg(test)]
    fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| Colour::from(*p))
    }

    /// Rasterise one shape onto the canvas.
    pub fn draw(&mut self, shape: &ShapeSpec) {
        let rgba = shape.colour().into();
        match shape {
            ShapeSpec::Ellipse { bounds, .. } => self.fill_ellipse(bounds, rgba),
            ShapeSpec::Rectangle { bounds, .. } => self.fill_rect(bounds, rgba),
            ShapeSpec::Line {
                from, to, width, ..
            } => self.draw_line(*from, *to, *width, rgba),
            ShapeSpec::Polygon { points, .. } => self.fill_polygon(points, rgba),
        }
    }

    /// Finish drawing and hand over the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// The whole canvas as an inclusive box.
    fn area(&self) -> Bounds {
        Bounds::new(
            0,
            0,
            self.width() as i32 - 1,
            self.height() as i32 - 1,
        )
    }

    fn put(&mut self, x: i32, y: i32, colour: Rgba<u8>) {
        if self.area().contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, colour);
        }
    }

    /// Clamp a box to the canvas, returning `None` when nothing is visible.
    fn clip(&self, bounds: &Bounds) -> Option<Bounds> {
        let area = self.area();
        let clipped = Bounds::new(
            bounds.left.max(area.left),
            bounds.top.max(area.top),
            bounds.right.min(area.right),
            bounds.bottom.min(area.bottom),
        );
        (clipped.left <= clipped.right && clipped.top <= clipped.bottom).then_some(clipped)
    }

    fn fill_rect(&mut self, bounds: &Bounds, rgba: Rgba<u8>) {
        let Some(area) = self.clip(bounds) else {
            return;
        };
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                self.put(x, y, rgba);
            }
        }
    }

    fn fill_ellipse(&mut self, bounds: &Bounds, rgba: Rgba<u8>) {
        let Some(area) = self.clip(bounds) else {
            return;
        };

        let cx = (bounds.left + bounds.right) as f64 / 2.0;
        let cy = (bounds.top + bounds.bottom) as f64 / 2.0;
        // Radii reach the outer edge of the boundary pixels.
        let rx = (bounds.right - bounds.left) as f64 / 2.0 + 0.5;
        let ry = (bounds.bottom - bounds.top) as f64 / 2.0 + 0.5;

        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                let dx = (x as f64 - cx) / rx;
                let dy = (y as f64 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, rgba);
                }
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, rgba: Rgba<u8>) {
        let width = width.max(1) as i32;

        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };

        // Thickness is stamped across the minor axis.
        let mostly_horizontal = dx >= -dy;
        let offsets = -(width / 2)..(width - width / 2);

        let (mut x, mut y) = (from.x, from.y);
        let mut err = dx + dy;
        loop {
            for o in offsets.clone() {
                if mostly_horizontal {
                    self.put(x, y + o, rgba);
                } else {
                    self.put(x + o, y, rgba);
                }
            }

            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], rgba: Rgba<u8>) {
        if points.is_empty() {
            return;
        }

        let hull = Bounds::new(
            points.iter().map(|p| p.x).min().unwrap_or(0),
            points.iter().map(|p| p.y).min().unwrap_or(0),
            points.iter().map(|p| p.x).max().unwrap_or(0),
            points.iter().map(|p| p.y).max().unwrap_or(0),
        );
        let Some(area) = self.clip(&hull) else {
            return;
        };

        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                if on_outline(points, x, y) || inside(points, x, y) {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}

/// Even-odd point-in-polygon test at a pixel centre.
fn inside(points: &[Point], x: i32, y: i32) -> bool {
    let (px, py) = (x as f64, y as f64);
    let mut result = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].x as f64, points[i].y as f64);
        let (xj, yj) = (points[j].x as f64, points[j].y as f64);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            result = !result;
        }
        j = i;
    }
    result
}

/// Whether a pixel centre lies exactly on one of the polygon's edges.
fn on_outline(points: &[Point], x: i32, y: i32) -> bool {
    let n = points.len();
    (0..n).any(|i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        let cross = (b.x - a.x) as i64 * (y - a.y) as i64 - (b.y - a.y) as i64 * (x - a.x) as i64;
        cross == 0
            && x >= a.x.min(b.x)
            && x <= a.x.max(b.x)
            && y >= a.y.min(b.y)
            && y <= a.y.max(b.y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(canvas: &Canvas) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y).is_some_and(|c| !c.is_transparent()))
            .count()
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(filled(&canvas), 0);
    }

    #[test]
    fn test_rectangle_is_inclusive() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw(&ShapeSpec::Rectangle {
            bounds: Bounds::new(1, 1, 3, 2),
            fill: Colour::WHITE,
        });

        assert_eq!(filled(&canvas), 6);
        assert_eq!(canvas.get(3, 2), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 2), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_shapes_are_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw(&ShapeSpec::Rectangle {
            bounds: Bounds::new(-5, -5, 10, 1),
            fill: Colour::WHITE,
        });
        canvas.draw(&ShapeSpec::Ellipse {
            bounds: Bounds::new(20, 20, 30, 30),
            fill: Colour::WHITE,
        });

        assert_eq!(filled(&canvas), 8);
    }

    #[test]
    fn test_line_clipped_at_negative_edge() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw(&ShapeSpec::Line {
            from: Point::new(-2, 0),
            to: Point::new(2, 0),
            width: 1,
            colour: Colour::SHIELD_GREEN,
        });

        assert_eq!(filled(&canvas), 3);
        assert_eq!(canvas.get(2, 0), Some(Colour::SHIELD_GREEN));
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = Canvas::new(8, 4);
        canvas.draw(&ShapeSpec::Line {
            from: Point::new(1, 2),
            to: Point::new(5, 2),
            width: 1,
            colour: Colour::BRAND_BLUE,
        });

        assert_eq!(filled(&canvas), 5);
        for x in 1..=5 {
            assert_eq!(canvas.get(x, 2), Some(Colour::BRAND_BLUE));
        }
    }

    #[test]
    fn test_thick_line_grows_upward() {
        let mut canvas = Canvas::new(8, 4);
        canvas.draw(&ShapeSpec::Line {
            from: Point::new(0, 2),
            to: Point::new(3, 2),
            width: 2,
            colour: Colour::SIGNATURE_PURPLE,
        });

        assert_eq!(filled(&canvas), 8);
        assert_eq!(canvas.get(0, 1), Some(Colour::SIGNATURE_PURPLE));
        assert_eq!(canvas.get(0, 3), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_diagonal_line_hits_endpoints() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw(&ShapeSpec::Line {
            from: Point::new(5, 5),
            to: Point::new(2, 2),
            width: 1,
            colour: Colour::WHITE,
        });

        assert_eq!(filled(&canvas), 4);
        assert_eq!(canvas.get(5, 5), Some(Colour::WHITE));
        assert_eq!(canvas.get(3, 3), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 2), Some(Colour::WHITE));
    }

    #[test]
    fn test_ellipse_inscribed_in_box() {
        let mut canvas = Canvas::new(3, 3);
        canvas.draw(&ShapeSpec::Ellipse {
            bounds: Bounds::new(0, 0, 2, 2),
            fill: Colour::WHITE,
        });

        // A 3x3 box with half-pixel padded radii covers every pixel.
        assert_eq!(filled(&canvas), 9);

        let mut canvas = Canvas::new(9, 9);
        canvas.draw(&ShapeSpec::Ellipse {
            bounds: Bounds::new(0, 0, 8, 8),
            fill: Colour::WHITE,
        });
        assert_eq!(canvas.get(4, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_diamond_polygon() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw(&ShapeSpec::Polygon {
            points: vec![
                Point::new(3, 0),
                Point::new(6, 3),
                Point::new(3, 6),
                Point::new(0, 3),
            ],
            fill: Colour::SHIELD_GREEN,
        });

        // |dx| + |dy| <= 3 around (3, 3): 1 + 3 + 5 + 7 + 5 + 3 + 1
        assert_eq!(filled(&canvas), 25);
        assert_eq!(canvas.get(3, 0), Some(Colour::SHIELD_GREEN));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_later_shapes_overwrite() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw(&ShapeSpec::Rectangle {
            bounds: Bounds::new(0, 0, 3, 3),
            fill: Colour::WHITE,
        });
        canvas.draw(&ShapeSpec::Rectangle {
            bounds: Bounds::new(1, 1, 1, 1),
            fill: Colour::SHIELD_GREEN,
        });

        assert_eq!(canvas.get(1, 1), Some(Colour::SHIELD_GREEN));
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
    }
}
