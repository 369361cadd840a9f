use crate::cell::CellRenderer;
use crate::config::{CELL_WIDTH, RenderConfig};
use crate::error::RenderError;
use crate::glyphs::GlyphTable;
use crate::grid::{GridSize, walk};
use image::{RgbaImage, imageops};
use log::debug;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// Decode an image file into RGBA pixels
///
/// The whole image is decoded before any rendering starts.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, RenderError> {
    let path = path.as_ref();
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    let image = reader.decode()?.to_rgba8();
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Height that keeps the aspect ratio of `width` x `height` at `target_width`
///
/// Rounded to the nearest pixel, at least 1. Fails when the result does not
/// fit an image dimension.
fn scaled_height(width: u32, height: u32, target_width: u32) -> Result<u32, RenderError> {
    let scaled = (height as u64 * target_width as u64 + width as u64 / 2) / width as u64;
    u32::try_from(scaled.max(1)).map_err(|_| {
        RenderError::InvalidConfig(format!(
            "resizing {width}x{height} to {target_width} pixels wide needs a height of {scaled}"
        ))
    })
}

/// Scale the image so it spans exactly `columns` cells, keeping aspect ratio
///
/// # Returns
/// The input unchanged when no resize is requested or the width already
/// matches, otherwise a resized copy.
fn resize_to_columns<'a>(
    input: &'a RgbaImage,
    config: &RenderConfig,
) -> Result<Cow<'a, RgbaImage>, RenderError> {
    let Some(columns) = config.columns else {
        return Ok(Cow::Borrowed(input));
    };

    let (width, height) = input.dimensions();
    let target_width = columns * CELL_WIDTH;
    if width == 0 || height == 0 || width == target_width {
        return Ok(Cow::Borrowed(input));
    }

    let target_height = scaled_height(width, height, target_width)?;
    debug!("resizing {width}x{height} -> {target_width}x{target_height}");

    Ok(Cow::Owned(imageops::resize(
        input,
        target_width,
        target_height,
        config.filter,
    )))
}

/// Render an image as octant art into `sink`
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Resize to the requested column count, if any
/// 3. Walk the 2×4 cell grid in raster order, writing one styled glyph per
///    cell and a newline per row
pub fn render_image<W: Write + ?Sized>(
    input: &RgbaImage,
    config: &RenderConfig,
    sink: &mut W,
) -> Result<(), RenderError> {
    config.validate().map_err(RenderError::InvalidConfig)?;

    let working_image = resize_to_columns(input, config)?;
    let grid = GridSize::for_dimensions(working_image.width(), working_image.height());
    debug!(
        "rendering {}x{} grid, {} cells ({:?} palette)",
        grid.columns,
        grid.rows,
        grid.cell_count(),
        config.palette_mode
    );

    let renderer = CellRenderer::new(GlyphTable::OCTANTS, config.palette_mode);
    walk(&working_image, &renderer, sink)?;
    Ok(())
}

/// Render an image as octant art into a `String`
pub fn render_to_string(input: &RgbaImage, config: &RenderConfig) -> Result<String, RenderError> {
    let mut out = Vec::new();
    render_image(input, config, &mut out)?;
    String::from_utf8(out)
        .map_err(|err| RenderError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
