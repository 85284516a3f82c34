//! Grid geometry and the mirrored cell walk

use crate::color::Rgba;
use crate::rendering::Canvas;

/// Pixel geometry of the cell grid, derived once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Side length of one square cell in pixels
    pub cell: u32,
    /// Offset of the grid's top-left corner; recenters the pixels left over
    /// after integer division
    pub margin: u32,
}

impl Geometry {
    pub fn compute(size: u32, margin_ratio: f64, num_cells: u32) -> Self {
        let base_margin = (f64::from(size) * margin_ratio).floor() as u32;
        let cell = size.saturating_sub(base_margin * 2) / num_cells;
        let margin = size.saturating_sub(cell * num_cells) / 2;
        log::debug!("grid geometry: cell={} margin={}", cell, margin);
        Self { cell, margin }
    }

    /// Pixel origin of the cell at grid coordinate (col, row)
    fn origin(&self, col: u32, row: u32) -> (u32, u32) {
        (col * self.cell + self.margin, row * self.cell + self.margin)
    }
}

/// Hex value of one digest character. Non-hex characters read as 0, the same
/// fallback the hue parse uses, so a digest with stray characters still
/// produces a stable pattern.
fn hex_digit(byte: u8) -> u32 {
    (byte as char).to_digit(16).unwrap_or(0)
}

/// Walk the grid and paint every cell, mirrored about the center column.
///
/// Each (row, col) pair in the left half maps to one digest character; an odd
/// hex value paints background, an even one paints foreground. The mirror
/// column always receives the same color, which is what makes every output
/// horizontally symmetric. The center column is its own mirror and is simply
/// painted twice with the same color.
pub fn paint(
    hash: &str,
    num_cells: u32,
    geometry: Geometry,
    foreground: Rgba,
    background: Rgba,
    canvas: &mut Canvas,
) {
    debug_assert!(num_cells % 2 == 1, "cell count is validated odd upstream");
    debug_assert!(!hash.is_empty(), "digest resolution never yields an empty hash");
    let half = (num_cells - 1) / 2;
    let bytes = hash.as_bytes();

    for row in 0..num_cells {
        for col in 0..=half {
            let idx = ((row * half + col) as usize) % bytes.len();
            let color = if hex_digit(bytes[idx]) % 2 == 1 {
                background
            } else {
                foreground
            };

            let (x, y) = geometry.origin(col, row);
            canvas.paint_rect(x, y, geometry.cell, geometry.cell, color);
            let (mx, my) = geometry.origin(num_cells - 1 - col, row);
            canvas.paint_rect(mx, my, geometry.cell, geometry.cell, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_matches_hand_computed_values() {
        // size 64, margin 0.08: base margin 5, cell (64-10)/5 = 10,
        // recentered margin (64-50)/2 = 7.
        let g = Geometry::compute(64, 0.08, 5);
        assert_eq!(g, Geometry { cell: 10, margin: 7 });
    }

    #[test]
    fn geometry_recenters_leftover_pixels() {
        let g = Geometry::compute(100, 0.1, 7);
        let used = g.cell * 7;
        assert!(g.margin * 2 + used <= 100);
        assert!(100 - (g.margin * 2 + used) <= 1);
    }

    #[test]
    fn hex_digit_tolerates_garbage() {
        assert_eq!(hex_digit(b'f'), 15);
        assert_eq!(hex_digit(b'7'), 7);
        assert_eq!(hex_digit(b'-'), 0);
        assert_eq!(hex_digit(b'z'), 0);
    }
}
