//! Placeholder image rendering
//!
//! The web layer only depends on [`ImageRenderer`]; [`PngRenderer`] is the
//! default implementation used by the binary.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

use crate::errors::{AppError, AppResult};

/// What to draw for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub width: u32,
    pub height: u32,
    /// Side of the checkerboard cells, in pixels
    pub square: Option<u32>,
    pub text: Option<String>,
}

/// Produces encoded image bytes for a validated request
pub trait ImageRenderer: Send + Sync {
    /// MIME type of the bytes returned by [`ImageRenderer::render`]
    fn content_type(&self) -> &'static str;

    fn render(&self, spec: &RenderSpec) -> AppResult<Vec<u8>>;
}

const BACKGROUND: Rgb<u8> = Rgb([0xcc, 0xcc, 0xcc]);
const ALTERNATE: Rgb<u8> = Rgb([0xaa, 0xaa, 0xaa]);

/// Renders a flat grey PNG, or a two-tone checkerboard when `square` is set
///
/// `text` is accepted but not drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl PngRenderer {
    pub fn new() -> Self {
        Self
    }

    fn pixel(x: u32, y: u32, square: Option<u32>) -> Rgb<u8> {
        match square {
            Some(side) if ((x / side) + (y / side)) % 2 == 1 => ALTERNATE,
            _ => BACKGROUND,
        }
    }
}

impl ImageRenderer for PngRenderer {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn render(&self, spec: &RenderSpec) -> AppResult<Vec<u8>> {
        if spec.width == 0 || spec.height == 0 {
            return Err(AppError::render(format!(
                "cannot render a {}x{} image",
                spec.width, spec.height
            )));
        }
        let square = spec.square.filter(|side| *side > 0);

        let img = RgbImage::from_fn(spec.width, spec.height, |x, y| Self::pixel(x, y, square));

        let mut png_bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| AppError::render(format!("PNG encoding failed: {e}")))?;
        Ok(png_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: u32, height: u32, square: Option<u32>) -> RenderSpec {
        RenderSpec {
            width,
            height,
            square,
            text: None,
        }
    }

    #[test]
    fn test_render_png_dimensions() {
        let bytes = PngRenderer::new().render(&spec(40, 20, None)).unwrap();

        let loaded = image::load_from_memory(&bytes).expect("Should decode generated PNG");
        assert_eq!(loaded.width(), 40);
        assert_eq!(loaded.height(), 20);
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_render_checkerboard() {
        let bytes = PngRenderer::new().render(&spec(20, 20, Some(10))).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();

        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(10, 0), ALTERNATE);
        assert_eq!(*img.get_pixel(0, 10), ALTERNATE);
        assert_eq!(*img.get_pixel(15, 15), BACKGROUND);
    }

    #[test]
    fn test_render_rejects_empty_image() {
        assert!(matches!(
            PngRenderer::new().render(&spec(0, 10, None)),
            Err(AppError::Render { .. })
        ));
    }
}
