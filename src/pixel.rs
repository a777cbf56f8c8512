use core::ops::{Index, IndexMut};

use crate::error::BitmapError;

/// One 24-bit pixel: independent red, green and blue channels, no alpha.
pub type Pixel = rgb::RGB8;

/// Pure white.
pub const WHITE: Pixel = Pixel {
    r: 255,
    g: 255,
    b: 255,
};

/// Pure black.
pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

/// Rectangular, row-major grid of pixels. Row 0 is the visual top.
///
/// Index with `grid[row][col]` or `grid[(row, col)]`. A grid with zero rows
/// is the empty grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// A `width` x `height` grid filled with black.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![BLACK; cell_count(width, height)],
            width,
            height,
        }
    }

    /// The empty grid (zero rows, zero columns).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `usize`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(cell_count(width, height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Wrap a row-major pixel buffer of exactly `width * height` pixels.
    pub fn from_pixels(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<Self, BitmapError> {
        let needed = width
            .checked_mul(height)
            .ok_or(BitmapError::DimensionsTooLarge {
                width: width as u64,
                height: height as u64,
            })?;
        if pixels.len() != needed {
            return Err(BitmapError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid from nested rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BitmapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (row, data) in rows.into_iter().enumerate() {
            if data.len() != width {
                return Err(BitmapError::RaggedRows {
                    row,
                    expected: width,
                    actual: data.len(),
                });
            }
            pixels.extend(data);
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_columns(&self) -> usize {
        self.width
    }

    pub fn num_rows(&self) -> usize {
        self.height
    }

    /// True when the grid holds no pixels (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Pixels of row `row`. Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let start = row * self.width;
        &mut self.pixels[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        (0..self.height).map(move |r| self.row(r))
    }

    /// The row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Copy into nested rows, `[row][col]`.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Replace every pixel with `f(pixel)`, reusing the allocation.
    pub(crate) fn map_pixels(mut self, f: impl Fn(Pixel) -> Pixel) -> Self {
        for px in &mut self.pixels {
            *px = f(*px);
        }
        self
    }

    /// Borrow as an [`imgref::ImgRef`].
    ///
    /// Returns [`BitmapError::EmptyGrid`] for grids without pixels, which
    /// imgref cannot represent.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, Pixel>, BitmapError> {
        if self.is_empty() {
            return Err(BitmapError::EmptyGrid);
        }
        Ok(imgref::ImgRef::new(&self.pixels[..], self.width, self.height))
    }

    /// Convert into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<Pixel>, BitmapError> {
        if self.is_empty() {
            return Err(BitmapError::EmptyGrid);
        }
        Ok(imgref::ImgVec::new(
            self.pixels.clone(),
            self.width,
            self.height,
        ))
    }

    /// Copy the visible pixels of an [`imgref::ImgRef`] (stride padding is dropped).
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, Pixel>) -> Self {
        let mut pixels = Vec::with_capacity(img.width() * img.height());
        for row in img.rows() {
            pixels.extend_from_slice(row);
        }
        Self {
            pixels,
            width: img.width(),
            height: img.height(),
        }
    }
}

fn cell_count(width: usize, height: usize) -> usize {
    match width.checked_mul(height) {
        Some(n) => n,
        None => panic!("grid dimensions {width}x{height} overflow usize"),
    }
}

impl Index<usize> for PixelGrid {
    type Output = [Pixel];

    fn index(&self, row: usize) -> &[Pixel] {
        self.row(row)
    }
}

impl IndexMut<usize> for PixelGrid {
    fn index_mut(&mut self, row: usize) -> &mut [Pixel] {
        self.row_mut(row)
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        &self.row(row)[col]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        &mut self.row_mut(row)[col]
    }
}
