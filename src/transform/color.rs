//! Per-pixel color transforms.
//!
//! Channel math is done in `u32`/`f64` and converted back with `as u8`, which
//! truncates toward zero and saturates to `0..=255`.

use crate::pixel::{BLACK, Pixel, PixelGrid, WHITE};

/// Factor used by [`lighten`].
pub const LIGHTEN_FACTOR: f64 = 0.6;
/// Factor used by [`darken`].
pub const DARKEN_FACTOR: f64 = 0.55;
/// Factor used by [`clarendon`].
pub const CLARENDON_FACTOR: f64 = 0.3;

/// Tone curve average at or above which a pixel is lightened.
const BRIGHT_THRESHOLD: u32 = 170;
/// Tone curve average below which a pixel is darkened.
const DARK_THRESHOLD: u32 = 90;
/// `255 / 2` with integer division.
const CONTRAST_THRESHOLD: u32 = 127;
const QUANTIZE_WHITE_SUM: u32 = 550;
const QUANTIZE_BLACK_SUM: u32 = 150;

fn average(px: Pixel) -> u32 {
    (u32::from(px.r) + u32::from(px.g) + u32::from(px.b)) / 3
}

fn channel_sum(px: Pixel) -> u32 {
    u32::from(px.r) + u32::from(px.g) + u32::from(px.b)
}

/// `c * factor`, truncated.
fn scale_channel(c: u8, factor: f64) -> u8 {
    (f64::from(c) * factor) as u8
}

/// `255 - (255 - c) * factor`, truncated.
fn lift_channel(c: u8, factor: f64) -> u8 {
    (255.0 - f64::from(255 - c) * factor) as u8
}

fn scale(px: Pixel, factor: f64) -> Pixel {
    Pixel::new(
        scale_channel(px.r, factor),
        scale_channel(px.g, factor),
        scale_channel(px.b, factor),
    )
}

fn lift(px: Pixel, factor: f64) -> Pixel {
    Pixel::new(
        lift_channel(px.r, factor),
        lift_channel(px.g, factor),
        lift_channel(px.b, factor),
    )
}

/// Darken toward the corners.
///
/// Each channel is scaled by `(rows - d) / rows`, where `d` is the Euclidean
/// distance from the pixel to `(rows / 2, cols / 2)`. On wide images the
/// factor goes negative far from the center; those channels clamp to 0.
pub fn vignette(mut grid: PixelGrid) -> PixelGrid {
    let rows = grid.num_rows();
    let cols = grid.num_columns();
    if grid.is_empty() {
        return grid;
    }
    let center_row = (rows / 2) as f64;
    let center_col = (cols / 2) as f64;
    let rows_f = rows as f64;

    for row in 0..rows {
        let dy = row as f64 - center_row;
        for (col, px) in grid.row_mut(row).iter_mut().enumerate() {
            let dx = col as f64 - center_col;
            let distance = (dx * dx + dy * dy).sqrt();
            *px = scale(*px, (rows_f - distance) / rows_f);
        }
    }
    grid
}

/// Push bright pixels brighter and dark pixels darker.
///
/// Pixels whose channel average is at least 170 become `255 - (255 - c) *
/// factor`; those below 90 become `c * factor`; the rest are unchanged.
/// `factor` is expected in `0.0..=1.0`; results outside the channel range
/// saturate.
pub fn tone_curve(grid: PixelGrid, factor: f64) -> PixelGrid {
    grid.map_pixels(|px| {
        let avg = average(px);
        if avg >= BRIGHT_THRESHOLD {
            lift(px, factor)
        } else if avg < DARK_THRESHOLD {
            scale(px, factor)
        } else {
            px
        }
    })
}

/// [`tone_curve`] with [`CLARENDON_FACTOR`].
pub fn clarendon(grid: PixelGrid) -> PixelGrid {
    tone_curve(grid, CLARENDON_FACTOR)
}

/// Replace each pixel with the truncated average of its channels.
pub fn grayscale(grid: PixelGrid) -> PixelGrid {
    grid.map_pixels(|px| {
        let v = average(px) as u8;
        Pixel::new(v, v, v)
    })
}

/// Black and white only: average of 127 or more becomes white.
pub fn high_contrast(grid: PixelGrid) -> PixelGrid {
    grid.map_pixels(|px| {
        if average(px) >= CONTRAST_THRESHOLD {
            WHITE
        } else {
            BLACK
        }
    })
}

pub fn lighten(grid: PixelGrid) -> PixelGrid {
    grid.map_pixels(|px| lift(px, LIGHTEN_FACTOR))
}

pub fn darken(grid: PixelGrid) -> PixelGrid {
    grid.map_pixels(|px| scale(px, DARKEN_FACTOR))
}

/// Reduce to white, black, red, green and blue.
///
/// Channel sum of 550 or more is white, 150 or less is black. Otherwise the
/// pixel becomes pure green if green is strictly the largest channel, pure
/// blue if blue is, and pure red in every other case (including ties).
pub fn quantize_five(grid: PixelGrid) -> PixelGrid {
    grid.map_pixels(|px| {
        let sum = channel_sum(px);
        if sum >= QUANTIZE_WHITE_SUM {
            WHITE
        } else if sum <= QUANTIZE_BLACK_SUM {
            BLACK
        } else if px.g > px.r && px.g > px.b {
            Pixel::new(0, 255, 0)
        } else if px.b > px.r && px.b > px.g {
            Pixel::new(0, 0, 255)
        } else {
            Pixel::new(255, 0, 0)
        }
    })
}
