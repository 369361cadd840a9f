use crate::ansi::{ROW_TERMINATOR, write_cell};
use crate::cell::{Cell, CellRenderer};
use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use image::RgbaImage;
use log::trace;
use std::io::{self, Write};

/// Number of cells needed to cover an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    /// Cover `width` x `height` pixels; partial cells at the edges count
    ///
    /// An image without pixels has no cells and no rows.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self { columns: 0, rows: 0 };
        }
        Self {
            columns: width.div_ceil(CELL_WIDTH),
            rows: height.div_ceil(CELL_HEIGHT),
        }
    }

    pub fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

/// Render every cell of `image` to `sink` in raster order
///
/// A row terminator follows each row of cells. An image with no pixels
/// writes nothing. Write errors stop the walk and are returned as-is.
pub fn walk<W: Write + ?Sized>(
    image: &RgbaImage,
    renderer: &CellRenderer,
    sink: &mut W,
) -> io::Result<()> {
    let grid = GridSize::for_dimensions(image.width(), image.height());

    for row in 0..grid.rows {
        let y0 = row * CELL_HEIGHT;
        for column in 0..grid.columns {
            let x0 = column * CELL_WIDTH;
            let rendered = renderer.render(&Cell::extract(image, x0, y0));
            trace!("cell ({x0}, {y0}): pattern {:#010b}", rendered.pattern.0);
            write_cell(sink, &rendered)?;
        }
        sink.write_all(ROW_TERMINATOR.as_bytes())?;
    }

    Ok(())
}
