//! Render backends: one raster (PNG), one vector (SVG)
//!
//! The output format is resolved once at render start into a [`Canvas`]
//! variant; the pattern walk then paints rectangles without ever consulting
//! the format string again.

pub mod raster;
pub mod svg;

use crate::color::Rgba;
use crate::error::Result;

pub use raster::RasterCanvas;
pub use svg::SvgCanvas;

/// Output encoding for a rendered identicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Detect the format from a free-form string: anything containing "svg"
    /// (case-insensitive) selects the vector backend, everything else is PNG.
    pub fn detect(format: &str) -> Self {
        if format.to_ascii_lowercase().contains("svg") {
            OutputFormat::Svg
        } else {
            OutputFormat::Png
        }
    }
}

/// A painted rectangle, accumulated by the vector backend
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    /// CSS color string; compared literally against the background string
    /// when deciding whether the rect can be omitted from the markup
    pub color: String,
}

/// Tagged render target. Both variants share the paint/serialize contract;
/// the variant is chosen once per render from the configured format.
#[derive(Debug)]
pub enum Canvas {
    Raster(RasterCanvas),
    Svg(SvgCanvas),
}

impl Canvas {
    pub fn new(format: OutputFormat, size: u32, foreground: Rgba, background: Rgba) -> Self {
        match format {
            OutputFormat::Png => Canvas::Raster(RasterCanvas::new(size, background)),
            OutputFormat::Svg => Canvas::Svg(SvgCanvas::new(size, foreground, background)),
        }
    }

    /// Paint a filled rectangle in the given color
    pub fn paint_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        match self {
            Canvas::Raster(c) => c.paint_rect(x, y, w, h, color),
            Canvas::Svg(c) => c.paint_rect(x, y, w, h, color),
        }
    }

    /// Consume the canvas and produce the base64-encoded output
    pub fn into_base64(self) -> Result<String> {
        match self {
            Canvas::Raster(c) => c.into_base64(),
            Canvas::Svg(c) => Ok(c.into_base64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_is_substring_and_case_insensitive() {
        assert_eq!(OutputFormat::detect("png"), OutputFormat::Png);
        assert_eq!(OutputFormat::detect("svg"), OutputFormat::Svg);
        assert_eq!(OutputFormat::detect("SVG"), OutputFormat::Svg);
        assert_eq!(OutputFormat::detect("image/svg+xml"), OutputFormat::Svg);
        assert_eq!(OutputFormat::detect(""), OutputFormat::Png);
        assert_eq!(OutputFormat::detect("jpeg"), OutputFormat::Png);
    }
}
