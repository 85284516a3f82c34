use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;

use identigen::{Identicon, IdenticonConfig, Rgba};

/// Generate a deterministic identicon from a hash string
#[derive(Parser, Debug)]
#[command(name = "identigen", version, about)]
struct Cli {
    /// Hash string driving color and pattern; omit to synthesize one
    hash: Option<String>,

    /// Seed for digest synthesis when no hash is given
    #[arg(long)]
    seed: Option<String>,

    /// Output edge length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Margin as a ratio of size, e.g. 0.08
    #[arg(long)]
    margin: Option<f64>,

    /// Cells per grid edge (odd)
    #[arg(long)]
    cells: Option<u32>,

    /// Output format: png or svg
    #[arg(long)]
    format: Option<String>,

    /// Background color as r,g,b or r,g,b,a
    #[arg(long)]
    background: Option<String>,

    /// Foreground color as r,g,b or r,g,b,a (default: derived from hash)
    #[arg(long)]
    foreground: Option<String>,

    /// JSON configuration file; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write decoded image bytes to this file instead of printing base64
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<Rgba> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("invalid color {:?}; expected r,g,b or r,g,b,a", s))?;
    match parts.as_slice() {
        [r, g, b] => Ok(Rgba::rgb(*r, *g, *b)),
        [r, g, b, a] => Ok(Rgba::rgba(*r, *g, *b, *a)),
        _ => bail!("invalid color {:?}; expected 3 or 4 channels", s),
    }
}

fn build_config(cli: &Cli) -> Result<IdenticonConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("unable to read config {:?}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {:?}", path))?
        }
        None => IdenticonConfig::default(),
    };

    if cli.hash.is_some() {
        config.hash = cli.hash.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed.clone();
    }
    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(margin) = cli.margin {
        config.margin = margin;
    }
    if let Some(cells) = cli.cells {
        config.num_cells = cells;
    }
    if let Some(format) = &cli.format {
        config.format = format.clone();
    }
    if let Some(bg) = &cli.background {
        config.background = parse_color(bg)?;
    }
    if let Some(fg) = &cli.foreground {
        config.foreground = Some(parse_color(fg)?);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let identicon = Identicon::new(config)?;
    let encoded = identicon.render()?;

    match &cli.out {
        Some(path) => {
            let bytes = STANDARD.decode(&encoded).context("output was not valid base64")?;
            fs::write(path, bytes).with_context(|| format!("unable to write {:?}", path))?;
            eprintln!("wrote {:?}", path);
        }
        None => println!("{}", encoded),
    }

    Ok(())
}
