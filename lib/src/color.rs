//! Pixel and color helpers shared by the quantizer and the pattern extractor

use image::{Rgb, Rgba};

/// Pixel used for cell positions that fall outside the image
pub const DEFAULT_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Compare two pixels on their RGB channels, ignoring alpha
///
/// 8-bit channels compare exactly like their 16-bit expansion (`v * 257`),
/// so no rounding can make equal colors look different.
#[inline]
pub fn same_rgb(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

/// Drop the alpha channel
#[inline]
pub fn to_rgb(pixel: Rgba<u8>) -> Rgb<u8> {
    Rgb([pixel[0], pixel[1], pixel[2]])
}

/// Rounded per-channel mean of a set of colors, `None` when empty
pub fn mean_color<'a, I>(colors: I) -> Option<Rgb<u8>>
where
    I: IntoIterator<Item = &'a Rgb<u8>>,
{
    let mut sum = [0u32; 3];
    let mut count = 0u32;

    for color in colors {
        for (acc, &channel) in sum.iter_mut().zip(color.0.iter()) {
            *acc += channel as u32;
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let avg = |total: u32| ((total + count / 2) / count) as u8;
    Some(Rgb([avg(sum[0]), avg(sum[1]), avg(sum[2])]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_rgb_ignores_alpha() {
        assert!(same_rgb(Rgba([10, 20, 30, 255]), Rgba([10, 20, 30, 0])));
        assert!(!same_rgb(Rgba([10, 20, 30, 255]), Rgba([10, 20, 31, 255])));
    }

    #[test]
    fn test_default_pixel_equals_opaque_black() {
        assert!(same_rgb(DEFAULT_PIXEL, Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_mean_color_rounds() {
        let colors = [Rgb([0, 0, 0]), Rgb([255, 1, 3])];
        // 127.5 rounds up, 0.5 rounds up, 1.5 rounds up
        assert_eq!(mean_color(&colors), Some(Rgb([128, 1, 2])));
    }

    #[test]
    fn test_mean_color_empty() {
        assert_eq!(mean_color(&[] as &[Rgb<u8>]), None);
    }
}
