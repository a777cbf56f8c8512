//! 24-bit BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;
pub(crate) mod field;

pub use decode::BmpPermissiveness;
pub(crate) use decode::{BmpHeader, parse_bmp_header};

use enough::Stop;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;

/// Decode BMP data into a grid.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<PixelGrid, BitmapError> {
    let header = parse_bmp_header(data);
    decode::validate_header(&header, data.len(), permissiveness)?;
    check_limits(limits, header.width, header.height)?;
    stop.check()?;
    let grid = decode::decode_bmp_pixels(data, &header, stop)?;
    log::debug!(
        "decoded {}x{} BMP ({} bpp, data offset {}, row padding {})",
        header.width,
        header.height,
        header.bits_per_pixel,
        header.data_offset,
        header.row_padding()
    );
    Ok(grid)
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), BitmapError> {
    if let Some(limits) = limits {
        limits.check(width, height)?;
        let out_bytes = u64::from(width) * u64::from(height) * 3;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}

/// Encode a grid to BMP.
pub(crate) fn encode(grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let out = encode::encode_bmp(grid, stop)?;
    log::debug!(
        "encoded {}x{} grid as {} byte BMP",
        grid.width(),
        grid.height(),
        out.len()
    );
    Ok(out)
}
