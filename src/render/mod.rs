//! Rendering module for icongen.
//!
//! Builds the icon canvas from a design and encodes it to PNG and ICO files.

mod canvas;
mod ico;
mod png;

pub use canvas::Canvas;
pub use ico::{read_ico_sizes, write_ico};
pub use png::{resize, write_png, RESIZE_FILTER};

use image::RgbaImage;

use crate::types::IconDesign;

/// Draw every shape of the design, in order, onto a fresh transparent canvas.
pub fn build_icon(design: &IconDesign) -> RgbaImage {
    let mut canvas = Canvas::new(design.size, design.size);
    for shape in design.shapes() {
        canvas.draw(&shape);
    }
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn pixel(img: &RgbaImage, x: u32, y: u32) -> Colour {
        Colour::from(*img.get_pixel(x, y))
    }

    #[test]
    fn test_build_icon_size() {
        let img = build_icon(&IconDesign::default());
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn test_build_icon_deterministic() {
        let design = IconDesign::default();
        assert_eq!(build_icon(&design), build_icon(&design));
    }

    #[test]
    fn test_background_disc() {
        let img = build_icon(&IconDesign::default());

        assert_eq!(pixel(&img, 0, 0), Colour::TRANSPARENT);
        assert_eq!(pixel(&img, 2, 2), Colour::TRANSPARENT);
        assert_eq!(pixel(&img, 16, 1), Colour::TRANSPARENT);
        assert_eq!(pixel(&img, 16, 2), Colour::BRAND_BLUE);
        assert_eq!(pixel(&img, 12, 27), Colour::BRAND_BLUE);
    }

    #[test]
    fn test_document_and_text_lines() {
        let img = build_icon(&IconDesign::default());

        assert_eq!(pixel(&img, 9, 7), Colour::WHITE);
        assert_eq!(pixel(&img, 8, 22), Colour::WHITE);
        assert_eq!(pixel(&img, 12, 9), Colour::BRAND_BLUE);
        assert_eq!(pixel(&img, 18, 12), Colour::BRAND_BLUE);
        assert_eq!(pixel(&img, 19, 12), Colour::WHITE);
        assert_eq!(pixel(&img, 10, 15), Colour::BRAND_BLUE);
    }

    #[test]
    fn test_shield_overwrites_document() {
        let img = build_icon(&IconDesign::default());

        assert_eq!(pixel(&img, 16, 15), Colour::SHIELD_GREEN);
        assert_eq!(pixel(&img, 16, 16), Colour::SHIELD_GREEN);
        assert_eq!(pixel(&img, 16, 20), Colour::SHIELD_GREEN);
        assert_eq!(pixel(&img, 13, 18), Colour::SHIELD_GREEN);
    }

    #[test]
    fn test_checkmark_overwrites_shield() {
        let img = build_icon(&IconDesign::default());

        assert_eq!(pixel(&img, 14, 18), Colour::WHITE);
        assert_eq!(pixel(&img, 15, 19), Colour::WHITE);
        assert_eq!(pixel(&img, 16, 18), Colour::WHITE);
        assert_eq!(pixel(&img, 17, 17), Colour::WHITE);
    }

    #[test]
    fn test_signature() {
        let img = build_icon(&IconDesign::default());

        assert_eq!(pixel(&img, 10, 26), Colour::SIGNATURE_PURPLE);
        assert_eq!(pixel(&img, 12, 25), Colour::SIGNATURE_PURPLE);
        assert_eq!(pixel(&img, 19, 26), Colour::SIGNATURE_PURPLE);
        assert_eq!(pixel(&img, 20, 27), Colour::SIGNATURE_PURPLE);
        assert_eq!(pixel(&img, 17, 26), Colour::BRAND_BLUE);
    }
}
