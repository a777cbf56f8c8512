//! Grid-to-grid transforms.
//!
//! Every transform consumes its input grid and returns a new one; color
//! transforms reuse the allocation, geometric ones build a fresh grid when the
//! dimensions change. All of them pass an empty grid through unchanged.

mod color;
mod geometry;

pub use color::{
    CLARENDON_FACTOR, DARKEN_FACTOR, LIGHTEN_FACTOR, clarendon, darken, grayscale, high_contrast,
    lighten, quantize_five, tone_curve, vignette,
};
pub use geometry::{
    enlarge, reflect_horizontal, reflect_vertical, rotate, rotate_90, rotate_180, rotate_270,
    transpose,
};

use crate::pixel::PixelGrid;

/// One transform together with its parameters.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Vignette,
    /// Lighten bright and darken dark pixels by `factor`.
    ToneCurve { factor: f64 },
    Clarendon,
    Grayscale,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Clockwise rotation; angles not divisible by 90 are a no-op.
    Rotate { degrees: i32 },
    Transpose,
    ReflectHorizontal,
    ReflectVertical,
    /// Nearest-neighbor upscale, `x` across and `y` down.
    Enlarge { x: usize, y: usize },
    HighContrast,
    Lighten,
    Darken,
    QuantizeFive,
}

impl Transform {
    /// Apply to `grid`.
    pub fn apply(self, grid: PixelGrid) -> PixelGrid {
        log::debug!(
            "applying {} to {}x{} grid",
            self.name(),
            grid.width(),
            grid.height()
        );
        match self {
            Self::Vignette => vignette(grid),
            Self::ToneCurve { factor } => tone_curve(grid, factor),
            Self::Clarendon => clarendon(grid),
            Self::Grayscale => grayscale(grid),
            Self::Rotate90 => rotate_90(grid),
            Self::Rotate180 => rotate_180(grid),
            Self::Rotate270 => rotate_270(grid),
            Self::Rotate { degrees } => rotate(grid, degrees),
            Self::Transpose => transpose(grid),
            Self::ReflectHorizontal => reflect_horizontal(grid),
            Self::ReflectVertical => reflect_vertical(grid),
            Self::Enlarge { x, y } => enlarge(grid, x, y),
            Self::HighContrast => high_contrast(grid),
            Self::Lighten => lighten(grid),
            Self::Darken => darken(grid),
            Self::QuantizeFive => quantize_five(grid),
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::ToneCurve { .. } => "tone-curve",
            Self::Clarendon => "clarendon",
            Self::Grayscale => "grayscale",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::Rotate { .. } => "rotate",
            Self::Transpose => "transpose",
            Self::ReflectHorizontal => "reflect-horizontal",
            Self::ReflectVertical => "reflect-vertical",
            Self::Enlarge { .. } => "enlarge",
            Self::HighContrast => "high-contrast",
            Self::Lighten => "lighten",
            Self::Darken => "darken",
            Self::QuantizeFive => "quantize-five",
        }
    }
}

/// Apply `transforms` in order.
pub fn apply_all(grid: PixelGrid, transforms: &[Transform]) -> PixelGrid {
    transforms.iter().fold(grid, |grid, t| t.apply(grid))
}
