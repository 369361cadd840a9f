use image::imageops::FilterType;

/// Width of one cell in source pixels
pub const CELL_WIDTH: u32 = 2;

/// Height of one cell in source pixels
pub const CELL_HEIGHT: u32 = 4;

/// Number of pixels in one cell, and the bit width of a pattern index
pub const CELL_PIXELS: usize = (CELL_WIDTH * CELL_HEIGHT) as usize;

/// Largest accepted output width in cells
pub const MAX_COLUMNS: u32 = 4096;

/// How the two displayed colors of a cell are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Average the pixels on each side of the cell's own bit pattern.
    /// Glyph shape and colors always agree.
    #[default]
    Unified,
    /// Median-cut over the cell pixels, independent of the bit pattern.
    /// Mirrors earlier octant renderers, including the cases
    /// where the colors drift from the glyph shape.
    MedianCut,
}

/// Configuration for octant rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Palette selection strategy
    pub palette_mode: PaletteMode,

    /// Output width in cells; `None` renders at native resolution
    pub columns: Option<u32>,

    /// Resampling filter used when `columns` is set
    pub filter: FilterType,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette_mode: PaletteMode::Unified,
            columns: None,
            filter: FilterType::Lanczos3,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if let Some(columns) = self.columns {
            if columns == 0 || columns > MAX_COLUMNS {
                return Err(format!(
                    "columns must be between 1 and {}, got {}",
                    MAX_COLUMNS, columns
                ));
            }
        }
        Ok(())
    }
}
