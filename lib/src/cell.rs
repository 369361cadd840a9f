use crate::color::{DEFAULT_PIXEL, to_rgb};
use crate::config::{CELL_HEIGHT, CELL_PIXELS, CELL_WIDTH, PaletteMode};
use crate::glyphs::GlyphTable;
use crate::pattern::{BitPattern, bit_pattern};
use crate::quantize::{Palette, median_cut, split_means};
use image::{Rgb, Rgba, RgbaImage};

/// A 2×4 block of source pixels in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pixels: [Rgba<u8>; CELL_PIXELS],
}

impl Cell {
    /// Build a cell from row-major pixels
    pub fn from_pixels(pixels: [Rgba<u8>; CELL_PIXELS]) -> Self {
        Self { pixels }
    }

    /// Copy the cell whose top-left corner is at `(x0, y0)`
    ///
    /// Positions outside the image keep `DEFAULT_PIXEL`.
    pub fn extract(image: &RgbaImage, x0: u32, y0: u32) -> Self {
        let (width, height) = image.dimensions();
        let mut pixels = [DEFAULT_PIXEL; CELL_PIXELS];

        for dy in 0..CELL_HEIGHT {
            for dx in 0..CELL_WIDTH {
                let (x, y) = (x0 + dx, y0 + dy);
                if x < width && y < height {
                    pixels[(dy * CELL_WIDTH + dx) as usize] = *image.get_pixel(x, y);
                }
            }
        }

        Self { pixels }
    }

    pub fn pixels(&self) -> &[Rgba<u8>; CELL_PIXELS] {
        &self.pixels
    }

    /// Pixels without alpha, for the quantizer
    pub fn rgb_samples(&self) -> [Rgb<u8>; CELL_PIXELS] {
        self.pixels.map(to_rgb)
    }
}

/// Output of one cell: colors, glyph and the pattern that chose the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    pub glyph: char,
    pub pattern: BitPattern,
}

/// Turns cells into styled glyphs
#[derive(Debug, Clone, Copy)]
pub struct CellRenderer {
    glyphs: GlyphTable,
    mode: PaletteMode,
}

impl CellRenderer {
    pub fn new(glyphs: GlyphTable, mode: PaletteMode) -> Self {
        Self { glyphs, mode }
    }

    /// Palette for a cell under the configured mode
    ///
    /// `Unified` averages the pixels on each side of `pattern`, set bits
    /// first, so the foreground is the color the glyph draws.
    /// `MedianCut` ignores the pattern entirely.
    pub fn palette(&self, cell: &Cell, pattern: BitPattern) -> Palette {
        let samples = cell.rgb_samples();
        let palette = match self.mode {
            PaletteMode::Unified => split_means(&samples, |i| pattern.is_set(i)),
            PaletteMode::MedianCut => median_cut(&samples),
        };
        // Both reductions only return None for an empty sample set
        palette.unwrap_or(Palette::Uniform(samples[0]))
    }

    /// Reduce a cell to its rendered form
    pub fn render(&self, cell: &Cell) -> RenderedCell {
        let pattern = bit_pattern(cell);
        let palette = self.palette(cell, pattern);

        RenderedCell {
            foreground: palette.foreground(),
            background: palette.background(),
            glyph: self.glyphs.lookup(pattern.index()),
            pattern,
        }
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new(GlyphTable::OCTANTS, PaletteMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn top_row_black() -> Cell {
        let mut pixels = [WHITE; CELL_PIXELS];
        pixels[0] = BLACK;
        pixels[1] = BLACK;
        Cell::from_pixels(pixels)
    }

    #[test]
    fn test_extract_inside_image() {
        let img = RgbaImage::from_fn(4, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let cell = Cell::extract(&img, 2, 4);

        assert_eq!(cell.pixels()[0], Rgba([2, 4, 0, 255]));
        assert_eq!(cell.pixels()[1], Rgba([3, 4, 0, 255]));
        assert_eq!(cell.pixels()[7], Rgba([3, 7, 0, 255]));
    }

    #[test]
    fn test_extract_overhang_uses_default() {
        let img = RgbaImage::from_pixel(3, 5, WHITE);
        let cell = Cell::extract(&img, 2, 4);

        assert_eq!(cell.pixels()[0], WHITE);
        for &pixel in &cell.pixels()[1..] {
            assert_eq!(pixel, DEFAULT_PIXEL);
        }
    }

    #[test]
    fn test_render_uniform_black() {
        let cell = Cell::from_pixels([BLACK; CELL_PIXELS]);
        let rendered = CellRenderer::default().render(&cell);

        assert_eq!(rendered.pattern, BitPattern(0));
        assert_eq!(rendered.glyph, GlyphTable::OCTANTS.lookup(0));
        assert_eq!(rendered.glyph, ' ');
        assert_eq!(rendered.foreground, Rgb([0, 0, 0]));
        assert_eq!(rendered.background, rendered.foreground);
    }

    #[test]
    fn test_render_unified_two_colors() {
        let rendered = CellRenderer::default().render(&top_row_black());

        assert_eq!(rendered.pattern, BitPattern(0b0011_1111));
        assert_eq!(rendered.glyph, GlyphTable::OCTANTS.lookup(0b0011_1111));
        // Set bits are white, so white is drawn in the foreground
        assert_eq!(rendered.foreground, Rgb([255, 255, 255]));
        assert_eq!(rendered.background, Rgb([0, 0, 0]));
    }

    #[test]
    fn test_render_median_cut_two_colors() {
        let renderer = CellRenderer::new(GlyphTable::OCTANTS, PaletteMode::MedianCut);
        let rendered = renderer.render(&top_row_black());

        assert_eq!(rendered.pattern, BitPattern(0b0011_1111));
        assert_eq!(rendered.foreground, Rgb([0, 0, 0]));
        assert_eq!(rendered.background, Rgb([255, 255, 255]));
    }

    #[test]
    fn test_unified_colors_follow_the_pattern() {
        // Three colors: the third is averaged into the clear side
        let pixels = [
            BLACK,
            WHITE,
            Rgba([0, 0, 100, 255]),
            WHITE,
            BLACK,
            BLACK,
            BLACK,
            BLACK,
        ];
        let cell = Cell::from_pixels(pixels);
        let renderer = CellRenderer::default();
        let pattern = bit_pattern(&cell);

        assert_eq!(
            renderer.palette(&cell, pattern),
            Palette::Pair(Rgb([255, 255, 255]), Rgb([0, 0, 17]))
        );
    }

    #[test]
    fn test_uniform_cell_has_single_color_palette_in_both_modes() {
        let cell = Cell::from_pixels([WHITE; CELL_PIXELS]);
        for mode in [PaletteMode::Unified, PaletteMode::MedianCut] {
            let renderer = CellRenderer::new(GlyphTable::OCTANTS, mode);
            let palette = renderer.palette(&cell, bit_pattern(&cell));
            assert_eq!(palette.len(), 1);
        }
    }
}
