//! Render gradients between two colors to a PNG: one strip interpolated
//! through RGB, one through HSL. Every pixel is blended over a backdrop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use image::{Rgba, RgbaImage};
use swatch::{BlendMode, Color};
use tracing_subscriber::EnvFilter;

/// Render color gradients.
#[derive(Parser, Debug)]
#[command(name = "swatch-gradient")]
#[command(version)]
#[command(about = "Render RGB and HSL gradients between two colors", long_about = None)]
struct Cli {
    /// Color at the left edge (name, hex, rgb(), hsl(), ...)
    #[arg(long, default_value = "red")]
    from: String,

    /// Color at the right edge
    #[arg(long, default_value = "blue")]
    to: String,

    /// Width of the image in pixels
    #[arg(long, default_value = "1000")]
    width: u32,

    /// Height of each strip in pixels
    #[arg(long, default_value = "100")]
    height: u32,

    /// Blend mode used to composite each pixel over the backdrop
    #[arg(long, default_value = "normal")]
    blend: BlendMode,

    /// Backdrop color
    #[arg(long, default_value = "white")]
    backdrop: String,

    /// Where to write the image
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,
}

type Interpolation = fn(&Color, &Color, f64) -> Color;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let left = Color::resolve(&cli.from);
    let right = Color::resolve(&cli.to);
    let backdrop = Color::resolve(&cli.backdrop);
    tracing::info!(
        from = %left,
        to = %right,
        backdrop = %backdrop,
        blend = %cli.blend,
        "rendering gradient"
    );

    let strips: [Interpolation; 2] = [
        |l, r, t| l.rgb_linear(r, t),
        |l, r, t| l.hsl_linear(r, t),
    ];

    let width = cli.width.max(1);
    let height = cli.height.max(1);

    let img = RgbaImage::from_fn(width, height * strips.len() as u32, |x, y| {
        let t = x as f64 / (width - 1).max(1) as f64;
        let interpolate = strips[(y / height) as usize];
        let color = backdrop.blend(&interpolate(&left, &right, t), cli.blend);
        Rgba(color.to_array())
    });

    img.save(&cli.output)?;
    tracing::info!(path = %cli.output.display(), "saved");

    Ok(())
}
