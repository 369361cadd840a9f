use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use octant_rendr::{PaletteMode, RenderConfig, load_image, render_image};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Palette {
    /// Colors averaged from the glyph's own coverage
    Unified,
    /// Independent median-cut colors, as older octant renderers print them
    MedianCut,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Render an image as truecolor octant art
#[derive(Parser, Debug)]
#[command(name = "octant", version, about)]
struct Args {
    /// Input image file
    input: PathBuf,

    /// Output width in terminal cells (default: one cell per 2 pixels)
    #[arg(short, long)]
    columns: Option<u32>,

    /// How cell colors are chosen
    #[arg(short, long, value_enum, default_value_t = Palette::Unified)]
    palette: Palette,

    /// Resampling filter used with --columns
    #[arg(short, long, value_enum, default_value_t = Filter::Lanczos3)]
    filter: Filter,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the art
    env_logger::init();

    let args = Args::parse();
    let config = RenderConfig {
        palette_mode: match args.palette {
            Palette::Unified => PaletteMode::Unified,
            Palette::MedianCut => PaletteMode::MedianCut,
        },
        columns: args.columns,
        filter: args.filter.into(),
    };

    let input = load_image(&args.input)
        .with_context(|| format!("Failed to load image {}", args.input.display()))?;
    log::info!(
        "loaded {} ({}x{})",
        args.input.display(),
        input.width(),
        input.height()
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_image(&input, &config, &mut out).context("Failed to render image")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
