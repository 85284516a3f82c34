//! Raster backend: pixel writes into an RGBA buffer, serialized as PNG

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgba as ImageRgba, RgbaImage};
use std::io::Cursor;

use crate::color::Rgba;
use crate::error::Result;

/// Square pixel canvas backed by the `image` crate's RGBA buffer. The buffer
/// starts filled with the background color so margin pixels outside the cell
/// grid come out as background.
pub struct RasterCanvas {
    img: RgbaImage,
}

impl std::fmt::Debug for RasterCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterCanvas")
            .field("width", &self.img.width())
            .field("height", &self.img.height())
            .finish()
    }
}

impl RasterCanvas {
    pub fn new(size: u32, background: Rgba) -> Self {
        let bg = ImageRgba([background.r, background.g, background.b, background.a]);
        Self {
            img: RgbaImage::from_pixel(size, size, bg),
        }
    }

    /// Write `color` into every pixel of the rectangle, clipped to the canvas
    pub fn paint_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let px = ImageRgba([color.r, color.g, color.b, color.a]);
        let x_end = (x + w).min(self.img.width());
        let y_end = (y + h).min(self.img.height());
        for py in y.min(y_end)..y_end {
            for pxx in x.min(x_end)..x_end {
                self.img.put_pixel(pxx, py, px);
            }
        }
    }

    /// Encode the buffer as PNG bytes and base64 them
    pub fn into_base64(self) -> Result<String> {
        let mut bytes = Vec::new();
        self.img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(STANDARD.encode(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background_filled() {
        let c = RasterCanvas::new(4, Rgba::rgb(1, 2, 3));
        assert_eq!(c.img.get_pixel(0, 0), &ImageRgba([1, 2, 3, 255]));
        assert_eq!(c.img.get_pixel(3, 3), &ImageRgba([1, 2, 3, 255]));
    }

    #[test]
    fn paint_rect_writes_only_inside_the_rect() {
        let mut c = RasterCanvas::new(4, Rgba::rgb(0, 0, 0));
        c.paint_rect(1, 1, 2, 2, Rgba::rgb(255, 0, 0));
        assert_eq!(c.img.get_pixel(1, 1), &ImageRgba([255, 0, 0, 255]));
        assert_eq!(c.img.get_pixel(2, 2), &ImageRgba([255, 0, 0, 255]));
        assert_eq!(c.img.get_pixel(0, 0), &ImageRgba([0, 0, 0, 255]));
        assert_eq!(c.img.get_pixel(3, 3), &ImageRgba([0, 0, 0, 255]));
    }

    #[test]
    fn paint_rect_clips_at_the_canvas_edge() {
        let mut c = RasterCanvas::new(4, Rgba::rgb(0, 0, 0));
        c.paint_rect(3, 3, 5, 5, Rgba::rgb(9, 9, 9));
        assert_eq!(c.img.get_pixel(3, 3), &ImageRgba([9, 9, 9, 255]));
    }

    #[test]
    fn serializes_to_valid_base64_png() {
        let c = RasterCanvas::new(8, Rgba::rgb(10, 20, 30));
        let b64 = c.into_base64().unwrap();
        let bytes = STANDARD.decode(b64).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
