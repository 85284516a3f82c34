//! Vector backend: append-only rectangle list, serialized as SVG markup

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt::Write as _;

use crate::color::Rgba;
use crate::rendering::Rect;

/// Rectangle-list canvas. Colors are held as formatted CSS strings; a rect
/// whose string equals the background string is dropped at serialization
/// time since it would paint over an identical background fill.
#[derive(Debug)]
pub struct SvgCanvas {
    size: u32,
    foreground: String,
    background: String,
    rectangles: Vec<Rect>,
}

impl SvgCanvas {
    pub fn new(size: u32, foreground: Rgba, background: Rgba) -> Self {
        Self {
            size,
            foreground: foreground.css_string(),
            background: background.css_string(),
            rectangles: Vec::new(),
        }
    }

    pub fn paint_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        self.rectangles.push(Rect {
            x,
            y,
            w,
            h,
            color: color.css_string(),
        });
    }

    /// Build the markup document and base64-encode it
    pub fn into_base64(self) -> String {
        STANDARD.encode(self.to_markup())
    }

    fn to_markup(&self) -> String {
        let stroke = f64::from(self.size) * 0.005;
        let mut xml = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
             style=\"background-color:{bg};\">\
             <g style=\"fill:{fg}; stroke:{fg}; stroke-width:{stroke};\">",
            size = self.size,
            bg = self.background,
            fg = self.foreground,
        );

        for rect in &self.rectangles {
            // Background-colored cells render as empty space over the
            // background fill, so their rects are redundant.
            if rect.color == self.background {
                continue;
            }
            let _ = write!(
                xml,
                "<rect  x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                rect.x, rect.y, rect.w, rect.h
            );
        }

        xml.push_str("</g></svg>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_carries_size_and_colors() {
        let c = SvgCanvas::new(64, Rgba::rgb(1, 2, 3), Rgba::rgb(240, 240, 240));
        let xml = c.to_markup();
        assert!(xml.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\""));
        assert!(xml.contains("background-color:rgba(240,240,240,1);"));
        assert!(xml.contains("fill:rgba(1,2,3,1); stroke:rgba(1,2,3,1); stroke-width:0.32;"));
        assert!(xml.ends_with("</g></svg>"));
    }

    #[test]
    fn background_rects_are_omitted() {
        let bg = Rgba::rgb(240, 240, 240);
        let fg = Rgba::rgb(10, 20, 30);
        let mut c = SvgCanvas::new(32, fg, bg);
        c.paint_rect(0, 0, 8, 8, bg);
        c.paint_rect(8, 0, 8, 8, fg);
        let xml = c.to_markup();
        assert_eq!(xml.matches("<rect").count(), 1);
        assert!(xml.contains("x=\"8\""));
    }

    #[test]
    fn serialization_round_trips_through_base64() {
        let mut c = SvgCanvas::new(16, Rgba::rgb(1, 2, 3), Rgba::rgb(4, 5, 6));
        c.paint_rect(2, 2, 4, 4, Rgba::rgb(1, 2, 3));
        let expected = c.to_markup();
        let decoded = STANDARD.decode(c.into_base64()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), expected);
    }
}
