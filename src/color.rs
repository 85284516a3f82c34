//! RGBA color type and foreground derivation
//!
//! The foreground color comes from the trailing seven characters of the
//! digest, read as a hue on a fixed 50% saturation / 70% lightness ring.

use serde::{Deserialize, Serialize};

/// Maximum value of a 7-hex-digit number; normalizes the hue parse to [0,1).
const HUE_DIVISOR: f64 = 0xfffffff as f64;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color from RGB channels
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(r,g,b,a)` string with alpha as a rounded 0-1 fraction.
    /// Alpha collapses to 0 or 1; the SVG backend's background-omission
    /// comparison relies on this exact formatting.
    pub fn css_string(&self) -> String {
        let alpha = (f64::from(self.a) / 255.0).round() as u8;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 255 }
    }
}

/// Derive the foreground color from a digest: parse the last 7 characters as
/// base-16 and use them as a hue. Unparseable input (a digest with non-hex
/// characters in its tail) falls back to hue 0 rather than propagating a
/// parse failure into the color math.
pub fn derive_foreground(hash: &str) -> Rgba {
    let tail_start = hash.len().saturating_sub(7);
    // Byte offset is safe here only for ASCII digests; fall back to hue 0
    // when the boundary splits a multi-byte character.
    let hue = hash
        .get(tail_start..)
        .and_then(|tail| u64::from_str_radix(tail, 16).ok())
        .map_or(0.0, |v| v as f64 / HUE_DIVISOR);
    hsl_to_rgb(hue, 0.5, 0.7)
}

/// Convert hue/saturation/lightness to an opaque RGB color.
///
/// Six-sector conversion: the hue circle splits into 60-degree sectors, the
/// sector index picks each channel's value from a six-entry ramp table.
/// Sector indexing is taken mod 6, so hue values at or above 1 wrap instead
/// of indexing out of range.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgba {
    let spread = saturation * if lightness < 0.5 { lightness } else { 1.0 - lightness };
    let top = lightness + spread;
    let bottom = lightness - spread;
    let range = 2.0 * spread;

    let h6 = hue * 6.0;
    let sector = h6.floor() as i64;
    let frac = h6 - h6.floor();

    let ramp = [
        top,
        top - frac * range,
        bottom,
        bottom,
        bottom + frac * range,
        top,
    ];

    let channel = |offset: i64| {
        let idx = (sector + offset).rem_euclid(6) as usize;
        (ramp[idx] * 255.0).round() as u8
    };

    Rgba::rgb(channel(0), channel(4), channel(2))
}
