//! rasterize - draw a test scene onto a canvas and save it.
//!
//! With no arguments this draws a white diagonal across a black 1000x1000
//! monochrome canvas and writes `test.png`.
//!
//! Run: `cargo run --features cli --bin rasterize -- --scene shapes --mode rgb`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use trueno_raster::prelude::*;

/// Draw a test scene with trueno-raster and save it.
#[derive(Parser, Debug)]
#[command(name = "rasterize")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Draw lines, circles and discs onto a canvas and encode it", long_about = None)]
struct Cli {
    /// Color mode: mono/binary or rgb/fullcolor
    #[arg(short, long, default_value = "mono")]
    mode: ColorMode,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Background color as hex ARGB (e.g. FF000000)
    #[arg(long, default_value = "FF000000", value_parser = parse_color)]
    background: Color,

    /// Drawing color as hex ARGB
    #[arg(short, long, default_value = "FFFFFFFF", value_parser = parse_color)]
    color: Color,

    /// Scene to draw
    #[arg(short, long, value_enum, default_value_t = Scene::Diagonal)]
    scene: Scene,

    /// Output format identifier
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Output file path
    #[arg(short, long, default_value = "test.png")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scene {
    /// One Bresenham line from corner to corner
    Diagonal,
    /// Line fan, anti-aliased lines, circles and a disc
    Shapes,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    let hex = s.trim_start_matches("0x").trim_start_matches('#');
    u32::from_str_radix(hex, 16)
        .map(Color::from_argb)
        .map_err(|e| format!("invalid ARGB color {s:?}: {e}"))
}

/// Convert a canvas extent to the signed coordinate space of the primitives.
fn coordinate(extent: u32, axis: &str) -> Result<i32> {
    i32::try_from(extent)
        .with_context(|| format!("canvas {axis} {extent} exceeds the i32 coordinate range"))
}

/// `v * num / den` without intermediate overflow, for `0 <= num <= den`.
fn fraction(v: i32, num: i32, den: i32) -> i32 {
    (i64::from(v) * i64::from(num) / i64::from(den)) as i32
}

fn draw_scene(canvas: &mut Canvas, scene: Scene, color: Color) -> Result<()> {
    let w = coordinate(canvas.width(), "width")?;
    let h = coordinate(canvas.height(), "height")?;
    let mut draw = canvas.draw();

    match scene {
        Scene::Diagonal => draw.line(0, 0, w - 1, h - 1, color),
        Scene::Shapes => {
            let fan: Vec<LineSegment> = (0..=8)
                .map(|i| LineSegment::new(0, h - 1, fraction(w - 1, i, 8), 0))
                .collect();
            draw.lines(&fan, color);

            let aa: Vec<LineSegment> = (1..=4)
                .map(|i| LineSegment::new(w / 2, h / 2, w - 1, h / 2 + fraction(h, i, 10)))
                .collect();
            draw.lines_aa(&aa, color);

            let r = w.min(h) / 4;
            for k in 1..=3 {
                draw.circle(w / 2, h / 2, fraction(r, k, 3), color);
            }
            draw.disc(w / 2, h / 2, r / 6, color);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut canvas = Canvas::with_fill(cli.mode, cli.width, cli.height, cli.background)
        .context("failed to create canvas")?;
    draw_scene(&mut canvas, cli.scene, cli.color)?;

    canvas
        .save(&cli.output, &cli.format)
        .with_context(|| format!("failed to save {}", cli.output.display()))?;

    info!(
        "wrote {}x{} {} canvas to {}",
        canvas.width(),
        canvas.height(),
        canvas.mode(),
        cli.output.display()
    );

    Ok(())
}
