//! BMP encoder: uncompressed 24-bit, bottom-up, BITMAPINFOHEADER.

use enough::Stop;

use crate::error::BitmapError;
use crate::pixel::PixelGrid;

/// File header (14) plus info header (40).
pub(crate) const HEADER_SIZE: usize = 54;

/// 72 DPI expressed in pixels per meter.
const RESOLUTION_PPM: u32 = 2835;

/// Encode a grid as a 24-bit BMP.
pub(crate) fn encode_bmp(grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    if grid.is_empty() {
        return Err(BitmapError::EmptyGrid);
    }

    let w = grid.width();
    let h = grid.height();
    let too_large = || BitmapError::DimensionsTooLarge {
        width: w as u64,
        height: h as u64,
    };

    let row_bytes = w.checked_mul(3).ok_or_else(too_large)?;
    let pad_bytes = (4 - row_bytes % 4) % 4;
    let row_stride = row_bytes + pad_bytes;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(HEADER_SIZE)
        .ok_or_else(too_large)?;
    let width = u32::try_from(w).map_err(|_| too_large())?;
    let height = u32::try_from(h).map_err(|_| too_large())?;
    if u32::try_from(file_size).is_err() {
        return Err(too_large());
    }

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size as u32, pixel_data_size as u32, width, height);

    for (i, row) in grid.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: u32,
    pixel_data_size: u32,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // data offset

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
