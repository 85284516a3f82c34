//! Identigen
//!
//! Deterministic identicon generation: an arbitrary hash string is turned
//! into a foreground color, a horizontally mirrored grid of colored cells,
//! and a base64-encoded image in one of two encodings (PNG or SVG).
//!
//! The pipeline is pure and synchronous: for a fixed hash and configuration,
//! repeated renders produce byte-identical output. Nothing is shared across
//! calls, so rendering many identicons in parallel needs no coordination.
//!
//! # Example
//!
//! ```
//! use identigen::{Identicon, IdenticonConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdenticonConfig {
//!     hash: Some("89f5597cfb3a45083543660d2f6f8b479d06ea0".to_string()),
//!     size: 64,
//!     ..Default::default()
//! };
//!
//! let identicon = Identicon::new(config)?;
//! let base64_png = identicon.render()?;
//! assert!(!base64_png.is_empty());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod digest;
pub mod error;
pub mod pattern;
pub mod rendering;

pub use color::Rgba;
pub use error::{Error, Result};
pub use rendering::OutputFormat;

use pattern::Geometry;
use rendering::Canvas;

/// Configuration for identicon generation
///
/// Built once, validated by [`Identicon::new`], and never mutated afterwards.
/// Every field has a documented default, so partial configurations read
/// naturally with struct-update syntax:
///
/// ```
/// let cfg = identigen::IdenticonConfig {
///     size: 128,
///     ..Default::default()
/// };
/// assert_eq!(cfg.num_cells, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdenticonConfig {
    /// Entropy source for color and pattern. When absent (or empty), a
    /// digest is synthesized from `seed`.
    pub hash: Option<String>,
    /// Seed for digest synthesis when no hash is given. When this is also
    /// absent, the seed comes from the wall clock and output is
    /// non-deterministic across calls.
    pub seed: Option<String>,
    /// Background color, default light gray (240,240,240,255)
    pub background: Rgba,
    /// Explicit foreground color; when absent the foreground is derived
    /// from the hash's trailing characters
    pub foreground: Option<Rgba>,
    /// Margin around the cell grid as a ratio of `size`, default 0.08
    pub margin: f64,
    /// Output edge length in pixels, default 64
    pub size: u32,
    /// Output format string; anything containing "svg" (case-insensitive)
    /// selects the vector backend, everything else PNG. Default "png".
    pub format: String,
    /// Cells per grid edge; must be odd and positive. Default 5.
    pub num_cells: u32,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            hash: None,
            seed: None,
            background: Rgba::rgba(240, 240, 240, 255),
            foreground: None,
            margin: 0.08,
            size: 64,
            format: "png".to_string(),
            num_cells: 5,
        }
    }
}

/// A validated identicon, ready to render
///
/// Construction resolves the hash and both colors; [`Identicon::render`]
/// computes geometry, paints the mirrored grid, and serializes. Rendering
/// borrows immutably, so one identicon can be rendered repeatedly.
#[derive(Debug, Clone)]
pub struct Identicon {
    config: IdenticonConfig,
    hash: String,
    foreground: Rgba,
    background: Rgba,
}

impl Identicon {
    /// Validate the configuration and resolve hash and colors.
    ///
    /// The cell count is the only validated precondition and it is checked
    /// before any hash work: zero or even counts fail with
    /// [`Error::Config`].
    pub fn new(config: IdenticonConfig) -> Result<Self> {
        if config.num_cells == 0 {
            return Err(Error::Config("Number of cells must be positive.".to_string()));
        }
        if config.num_cells % 2 == 0 {
            return Err(Error::Config("Number of cells must be odd.".to_string()));
        }

        let hash = digest::resolve(config.hash.as_deref(), config.seed.as_deref());
        let foreground = config
            .foreground
            .unwrap_or_else(|| color::derive_foreground(&hash));
        let background = config.background;
        log::debug!(
            "identicon: hash={} fg=({},{},{},{})",
            hash,
            foreground.r,
            foreground.g,
            foreground.b,
            foreground.a
        );

        Ok(Self {
            config,
            hash,
            foreground,
            background,
        })
    }

    /// Build an identicon for a hash with all other options defaulted
    pub fn from_hash(hash: &str) -> Result<Self> {
        Self::new(IdenticonConfig {
            hash: Some(hash.to_string()),
            ..Default::default()
        })
    }

    /// The resolved digest driving color and pattern selection
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The foreground color (explicit or derived)
    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    /// Render to a base64-encoded string: PNG bytes or SVG markup depending
    /// on the configured format
    pub fn render(&self) -> Result<String> {
        let format = OutputFormat::detect(&self.config.format);
        let geometry = Geometry::compute(self.config.size, self.config.margin, self.config.num_cells);
        let mut canvas = Canvas::new(format, self.config.size, self.foreground, self.background);
        pattern::paint(
            &self.hash,
            self.config.num_cells,
            geometry,
            self.foreground,
            self.background,
            &mut canvas,
        );
        canvas.into_base64()
    }
}
