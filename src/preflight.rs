//! Startup checks that run before anything is drawn or written.

use image::ImageFormat;

use crate::error::{IconError, Result};

/// Formats every export needs an encoder for.
pub const REQUIRED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Ico];

/// Make sure this build of `image` can encode every required format.
pub fn ensure_codecs() -> Result<()> {
    ensure_formats(&REQUIRED_FORMATS, |format| format.writing_enabled())
}

fn ensure_formats(formats: &[ImageFormat], enabled: impl Fn(ImageFormat) -> bool) -> Result<()> {
    match formats.iter().copied().find(|&format| !enabled(format)) {
        None => Ok(()),
        Some(format) => {
            let feature = format.extensions_str().first().copied().unwrap_or("png");
            Err(IconError::MissingCodec {
                format: format!("{:?}", format).to_uppercase(),
                help: Some(format!(
                    "Rebuild with the `{}` feature of the `image` crate enabled, e.g. \
                     image = {{ version = \"0.25\", features = [\"png\", \"ico\"] }}",
                    feature
                )),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codecs_available() {
        ensure_codecs().unwrap();
    }

    #[test]
    fn test_missing_codec_reported() {
        let err = ensure_formats(&REQUIRED_FORMATS, |f| f != ImageFormat::Ico).unwrap_err();

        match err {
            IconError::MissingCodec { format, help } => {
                assert_eq!(format, "ICO");
                assert!(help.unwrap().contains("`ico` feature"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_missing_codec_wins() {
        let err = ensure_formats(&REQUIRED_FORMATS, |_| false).unwrap_err();
        assert_eq!(err.to_string(), "PNG encoding is not available in this build");
    }
}
