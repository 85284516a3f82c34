//! Minimal example: render one identicon as PNG and one as SVG
//!
//! Run with: cargo run --example basic

use identigen::{Identicon, IdenticonConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let hash = "89f5597cfb3a45083543660d2f6f8b479d06ea0";

    let png = Identicon::from_hash(hash)?.render()?;
    println!("PNG (base64, {} chars):\n{}\n", png.len(), png);

    let cfg = IdenticonConfig {
        hash: Some(hash.to_string()),
        format: "svg".to_string(),
        size: 128,
        ..Default::default()
    };
    let svg = Identicon::new(cfg)?.render()?;
    println!("SVG (base64, {} chars):\n{}", svg.len(), svg);

    Ok(())
}
