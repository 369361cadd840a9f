/// Basic example: render a synthesized image as octant art
///
/// Draws a circle with a diagonal line over a gradient and prints it to
/// stdout once per palette mode.
use octant_rendr::{PaletteMode, RenderConfig, render_image};
use image::{Rgba, RgbaImage};
use std::io::Write;

fn main() {
    // 80x48 pixels is 40x12 cells
    let width = 80;
    let height = 48;

    let mut img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 3) as u8, (y * 5) as u8, 96, 255])
    });

    // Draw a white circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 18.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 1.5 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    // Draw a diagonal line
    for i in 0..height {
        img.put_pixel(i, i, Rgba([255, 0, 0, 255]));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for mode in [PaletteMode::Unified, PaletteMode::MedianCut] {
        writeln!(out, "{:?} palette:", mode).expect("Failed to write");
        let config = RenderConfig {
            palette_mode: mode,
            ..Default::default()
        };
        render_image(&img, &config, &mut out).expect("Failed to render");
        writeln!(out).expect("Failed to write");
    }
}
