//! Two-color quantization of a cell's pixels
//!
//! Two reductions are provided. `median_cut` is a classic median-cut
//! restricted to a single split, which yields at most two colors.
//! `split_means` averages the two sides of a known partition, which lets the
//! renderer derive its colors from the same partition that picked the glyph.

use crate::color::mean_color;
use image::Rgb;

/// One or two representative colors for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Every sample had the same color
    Uniform(Rgb<u8>),
    /// Two representative colors, in palette order
    Pair(Rgb<u8>, Rgb<u8>),
}

impl Palette {
    /// Number of colors, always 1 or 2
    pub fn len(&self) -> usize {
        match self {
            Palette::Uniform(_) => 1,
            Palette::Pair(..) => 2,
        }
    }

    /// Palette entry 0
    pub fn first(&self) -> Rgb<u8> {
        match *self {
            Palette::Uniform(c) | Palette::Pair(c, _) => c,
        }
    }

    /// Palette entry 1, if present
    pub fn second(&self) -> Option<Rgb<u8>> {
        match *self {
            Palette::Uniform(_) => None,
            Palette::Pair(_, c) => Some(c),
        }
    }

    /// Foreground color: entry 0
    pub fn foreground(&self) -> Rgb<u8> {
        self.first()
    }

    /// Background color: entry 1, or entry 0 for a uniform palette
    pub fn background(&self) -> Rgb<u8> {
        self.second().unwrap_or_else(|| self.first())
    }
}

/// Index of the RGB channel with the greatest range (ties go to the lower index)
fn widest_channel(samples: &[Rgb<u8>]) -> usize {
    let mut best = 0;
    let mut best_range = 0;

    for channel in 0..3 {
        let (min, max) = samples
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), c| (lo.min(c[channel]), hi.max(c[channel])));
        let range = max.saturating_sub(min);
        if range > best_range {
            best = channel;
            best_range = range;
        }
    }

    best
}

/// Reduce samples to at most two colors with a single median cut
///
/// Returns `None` only for an empty input. Identical samples give a
/// `Palette::Uniform`. Otherwise the samples are sorted along their widest
/// channel and cut at the median; the cut is moved to the nearest point
/// where that channel changes value so equal colors never land on both
/// sides. Each side is reduced to its rounded mean, lower side first.
///
/// With exactly two distinct colors both sides are pure, so the palette
/// holds those two colors unchanged.
pub fn median_cut(samples: &[Rgb<u8>]) -> Option<Palette> {
    let first = *samples.first()?;
    if samples.iter().all(|&c| c == first) {
        return Some(Palette::Uniform(first));
    }

    let channel = widest_channel(samples);
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|c| (c[channel], c[0], c[1], c[2]));

    let median = sorted.len() / 2;
    let split = (1..sorted.len())
        .filter(|&k| sorted[k - 1][channel] != sorted[k][channel])
        .min_by_key(|&k| (k.abs_diff(median), k))?;

    let (low, high) = sorted.split_at(split);
    Some(Palette::Pair(mean_color(low)?, mean_color(high)?))
}

/// Average the samples on each side of a partition
///
/// `selected(i)` tells whether sample `i` belongs to the first group.
/// Returns `Pair(mean(selected), mean(rest))`, or `Uniform` when one side
/// is empty. `None` only for an empty input.
pub fn split_means<F>(samples: &[Rgb<u8>], mut selected: F) -> Option<Palette>
where
    F: FnMut(usize) -> bool,
{
    let (chosen, rest): (Vec<(usize, &Rgb<u8>)>, Vec<(usize, &Rgb<u8>)>) =
        samples.iter().enumerate().partition(|&(i, _)| selected(i));

    let chosen = mean_color(chosen.into_iter().map(|(_, c)| c));
    let rest = mean_color(rest.into_iter().map(|(_, c)| c));

    match (chosen, rest) {
        (Some(a), Some(b)) => Some(Palette::Pair(a, b)),
        (Some(c), None) | (None, Some(c)) => Some(Palette::Uniform(c)),
        (None, None) => None,
    }
}
