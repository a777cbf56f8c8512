//! Geometric remaps. Every output pixel is copied from exactly one input pixel.

use crate::pixel::PixelGrid;

/// Swap rows and columns: `out[r][c] = in[c][r]`.
pub fn transpose(grid: PixelGrid) -> PixelGrid {
    PixelGrid::from_fn(grid.num_rows(), grid.num_columns(), |row, col| {
        grid[col][row]
    })
}

/// Mirror left to right: `out[r][c] = in[r][cols - 1 - c]`.
pub fn reflect_horizontal(mut grid: PixelGrid) -> PixelGrid {
    for row in 0..grid.num_rows() {
        grid.row_mut(row).reverse();
    }
    grid
}

/// Mirror top to bottom: `out[r][c] = in[rows - 1 - r][c]`.
pub fn reflect_vertical(grid: PixelGrid) -> PixelGrid {
    let rows = grid.num_rows();
    PixelGrid::from_fn(grid.num_columns(), rows, |row, col| {
        grid[rows - 1 - row][col]
    })
}

/// Rotate 90 degrees clockwise. Output is `rows` wide and `cols` tall.
///
/// A transpose followed by a horizontal mirror, so
/// `out[r][c] = in[rows - 1 - c][r]`.
pub fn rotate_90(grid: PixelGrid) -> PixelGrid {
    reflect_horizontal(transpose(grid))
}

/// Rotate 180 degrees.
pub fn rotate_180(mut grid: PixelGrid) -> PixelGrid {
    grid.pixels_mut().reverse();
    grid
}

/// Rotate 270 degrees clockwise (90 counter-clockwise).
///
/// `out[r][c] = in[c][cols - 1 - r]`; undoes [`rotate_90`].
pub fn rotate_270(grid: PixelGrid) -> PixelGrid {
    transpose(reflect_horizontal(grid))
}

/// Rotate clockwise by a multiple of 90 degrees. Negative angles rotate
/// counter-clockwise.
///
/// Angles that are not a multiple of 90 return the grid unchanged.
pub fn rotate(grid: PixelGrid, degrees: i32) -> PixelGrid {
    if degrees % 90 != 0 {
        log::debug!("rotation by {degrees} degrees ignored: not a multiple of 90");
        return grid;
    }
    match degrees.rem_euclid(360) {
        90 => rotate_90(grid),
        180 => rotate_180(grid),
        270 => rotate_270(grid),
        _ => grid,
    }
}

/// Nearest-neighbor upscale: `x` times wider, `y` times taller.
///
/// `out[r][c] = in[r / y][c / x]`. A zero factor yields a grid with no rows
/// or no columns. If the output pixel count does not fit in `usize` the
/// result is the empty grid.
pub fn enlarge(grid: PixelGrid, x: usize, y: usize) -> PixelGrid {
    if x == 1 && y == 1 {
        return grid;
    }
    let dims = grid
        .num_columns()
        .checked_mul(x)
        .zip(grid.num_rows().checked_mul(y))
        .filter(|&(width, height)| width.checked_mul(height).is_some());
    let Some((width, height)) = dims else {
        log::warn!(
            "enlarge {}x{} by {x}x{y} overflows; returning empty grid",
            grid.num_columns(),
            grid.num_rows()
        );
        return PixelGrid::empty();
    };
    PixelGrid::from_fn(width, height, |row, col| grid[row / y][col / x])
}
