//! # bmpfx
//!
//! 24-bit BMP decoder and encoder over a row-major [`PixelGrid`], plus a set of
//! pixel transforms that take one grid and return another.
//!
//! ## Pipeline
//!
//! bytes → [`decode_bmp`] → [`PixelGrid`] → one [`transform`] → [`PixelGrid`]
//! → [`encode_bmp`] → bytes
//!
//! ## Supported Input
//!
//! - Uncompressed BMP with a BITMAPINFOHEADER, 24 bits per pixel
//! - 32 bits per pixel is read as well; the fourth byte is ignored
//! - Bottom-up row order (positive height)
//!
//! Output is always 24-bit, bottom-up, 54-byte header, rows padded to 4 bytes.
//!
//! ## Validation
//!
//! By default the only consistency check is that the file size declared in
//! the header equals `data_offset + padded_row_size * height`. See
//! [`BmpPermissiveness`] for stricter and looser modes.
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfx::{transform, Unstoppable};
//!
//! let data = std::fs::read("in.bmp")?;
//! let grid = bmpfx::decode_bmp(&data, Unstoppable)?;
//! let gray = transform::grayscale(grid);
//! let out = bmpfx::encode_bmp(&gray, Unstoppable)?;
//! std::fs::write("out.bmp", out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For callers that only need a success flag there are [`read_image`] (empty
//! grid on failure) and [`write_image`] (`false` on failure).

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod error;
mod info;
mod limits;
mod pixel;

pub mod transform;

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

// Re-exports
pub use bmp::BmpPermissiveness;
pub use bmp::field::{FieldReader, read_le_uint};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BLACK, Pixel, PixelGrid, WHITE};
pub use transform::Transform;

/// Decode a BMP with default validation and no limits.
///
/// Pixel bytes missing past the end of `data` read as zero, so a bare header
/// can declare a grid of any size. For untrusted input use
/// [`DecodeRequest::with_limits`].
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<PixelGrid, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a grid as a 24-bit BMP.
pub fn encode_bmp(grid: &PixelGrid, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(grid, &stop)
}

/// Read and decode a BMP file.
pub fn read_bmp_file(path: impl AsRef<Path>) -> Result<PixelGrid, BitmapError> {
    let data = std::fs::read(path)?;
    decode_bmp(&data, Unstoppable)
}

/// Encode `grid` and write it to `path`.
///
/// The grid is encoded before the file is created, so an empty grid leaves no
/// file behind.
pub fn write_bmp_file(path: impl AsRef<Path>, grid: &PixelGrid) -> Result<(), BitmapError> {
    let data = encode_bmp(grid, Unstoppable)?;
    let mut file = File::create(path)?;
    file.write_all(&data)?;
    file.flush()?;
    Ok(())
}

/// Read a BMP file, returning an empty grid on any failure.
///
/// The failure reason is logged at `warn` level. Decoding applies no
/// [`Limits`]; see [`decode_bmp`].
pub fn read_image(path: impl AsRef<Path>) -> PixelGrid {
    let path = path.as_ref();
    match read_bmp_file(path) {
        Ok(grid) => grid,
        Err(e) => {
            log::warn!("failed to read {}: {e}", path.display());
            PixelGrid::empty()
        }
    }
}

/// Write a grid as a BMP file. Returns `false` if the grid is empty or the
/// file cannot be written.
pub fn write_image(path: impl AsRef<Path>, grid: &PixelGrid) -> bool {
    let path = path.as_ref();
    match write_bmp_file(path, grid) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to write {}: {e}", path.display());
            false
        }
    }
}
