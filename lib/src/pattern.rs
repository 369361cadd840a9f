//! Cell bit-pattern extraction
//!
//! A cell is scanned in row-major order. The first pixel is the reference
//! color and the first pixel that differs from it is the second color.
//! Every position holding the second color sets its bit, most significant
//! bit first, so the top-left pixel owns bit 7 of a 2×4 pattern.

use crate::cell::Cell;
use crate::color::same_rgb;
use crate::config::CELL_PIXELS;
use image::Rgba;

/// Coverage mask of a cell: one bit per pixel, row-major, MSB first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitPattern(pub u8);

impl BitPattern {
    /// Whether the pixel at row-major `position` holds the second color
    pub fn is_set(self, position: usize) -> bool {
        assert!(position < CELL_PIXELS, "cell position out of range");
        self.0 >> (CELL_PIXELS - 1 - position) & 1 == 1
    }

    /// Index value used for glyph lookup
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// First pixel in scan order that differs from the top-left pixel
///
/// `None` when the cell holds a single color.
pub fn second_color(cell: &Cell) -> Option<Rgba<u8>> {
    let pixels = cell.pixels();
    let color1 = pixels[0];
    pixels.iter().copied().find(|&p| !same_rgb(p, color1))
}

/// Build the bit pattern of a cell
///
/// A bit is set iff the cell has a second color and the pixel equals it.
/// Pixels matching neither reference color stay clear.
pub fn bit_pattern(cell: &Cell) -> BitPattern {
    let Some(color2) = second_color(cell) else {
        return BitPattern(0);
    };

    let bits = cell
        .pixels()
        .iter()
        .fold(0u8, |acc, &p| (acc << 1) | same_rgb(p, color2) as u8);
    BitPattern(bits)
}
