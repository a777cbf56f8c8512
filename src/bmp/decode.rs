//! 24/32-bit uncompressed BMP decoder.
//!
//! Header fields are read at their fixed BITMAPINFOHEADER offsets. The only
//! consistency check in the default mode is that the declared file size
//! matches the size implied by the pixel geometry.

use enough::Stop;

use super::field::FieldReader;
use crate::error::BitmapError;
use crate::pixel::{Pixel, PixelGrid};

// ── Header offsets ──────────────────────────────────────────────────

const OFFSET_FILE_SIZE: usize = 2;
const OFFSET_DATA_START: usize = 10;
const OFFSET_INFO_SIZE: usize = 14;
const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_PLANES: usize = 26;
const OFFSET_BPP: usize = 28;
const OFFSET_COMPRESSION: usize = 30;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Also require the `BM` magic, one color plane, no compression, an
    /// info header of at least 40 bytes, and a pixel array that is fully
    /// present in the input.
    Strict,

    /// Default behavior. The declared file size must equal
    /// `data_offset + (scanline + padding) * height`. Pixel bytes missing
    /// past the end of the input read as zero.
    #[default]
    Standard,

    /// Skip the file size check. Missing pixel bytes read as zero.
    Permissive,
}

// ── Parsed header ───────────────────────────────────────────────────

/// Raw header fields, as read. Nothing here has been validated.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BmpHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub data_offset: u32,
    pub info_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

impl BmpHeader {
    pub fn bytes_per_pixel(&self) -> u64 {
        u64::from(self.bits_per_pixel / 8)
    }

    /// Unpadded bytes per stored row.
    pub fn scanline_size(&self) -> u64 {
        u64::from(self.width) * self.bytes_per_pixel()
    }

    /// Zero bytes appended to each stored row to reach a multiple of 4.
    pub fn row_padding(&self) -> u64 {
        (4 - self.scanline_size() % 4) % 4
    }

    pub fn row_stride(&self) -> u64 {
        self.scanline_size() + self.row_padding()
    }

    /// File size implied by the geometry.
    pub fn expected_file_size(&self) -> u64 {
        u64::from(self.data_offset) + self.row_stride() * u64::from(self.height)
    }
}

/// Read the header fields. Never fails: missing bytes read as zero.
pub(crate) fn parse_bmp_header(data: &[u8]) -> BmpHeader {
    let mut reader = FieldReader::new(data);
    let magic = [reader.read_uint(0, 1) as u8, reader.read_uint(1, 1) as u8];
    BmpHeader {
        magic,
        file_size: reader.read_u32_at(OFFSET_FILE_SIZE),
        data_offset: reader.read_u32_at(OFFSET_DATA_START),
        info_size: reader.read_u32_at(OFFSET_INFO_SIZE),
        width: reader.read_u32_at(OFFSET_WIDTH),
        height: reader.read_u32_at(OFFSET_HEIGHT),
        planes: reader.read_u16_at(OFFSET_PLANES),
        bits_per_pixel: reader.read_u16_at(OFFSET_BPP),
        compression: reader.read_u32_at(OFFSET_COMPRESSION),
    }
}

/// Check the header against the permissiveness level and the input length.
pub(crate) fn validate_header(
    header: &BmpHeader,
    data_len: usize,
    permissiveness: BmpPermissiveness,
) -> Result<(), BitmapError> {
    let is_strict = permissiveness == BmpPermissiveness::Strict;

    if is_strict {
        if &header.magic != b"BM" {
            return Err(BitmapError::UnrecognizedFormat);
        }
        if header.info_size < 40 {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP info header size {} is smaller than 40",
                header.info_size
            )));
        }
        if header.planes != 1 {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP planes field is {}, expected 1",
                header.planes
            )));
        }
        if header.compression != 0 {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP compression {} is not supported",
                header.compression
            )));
        }
    }

    if permissiveness != BmpPermissiveness::Permissive {
        let expected = header.expected_file_size();
        if u64::from(header.file_size) != expected {
            return Err(BitmapError::SizeMismatch {
                declared: u64::from(header.file_size),
                expected,
            });
        }
    }

    if header.width == 0 {
        return Err(BitmapError::InvalidHeader("BMP width is zero".into()));
    }
    if header.height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }
    // Top-down bitmaps store a negative height.
    if header.width > i32::MAX as u32 || header.height > i32::MAX as u32 {
        return Err(BitmapError::InvalidHeader(format!(
            "BMP dimensions {}x{} out of range",
            header.width, header.height as i32
        )));
    }

    if !matches!(header.bits_per_pixel, 24 | 32) {
        return Err(BitmapError::UnsupportedBitDepth(header.bits_per_pixel));
    }

    let grid_bytes = u64::from(header.width) * u64::from(header.height) * 3;
    if grid_bytes > isize::MAX as u64 {
        return Err(BitmapError::DimensionsTooLarge {
            width: u64::from(header.width),
            height: u64::from(header.height),
        });
    }

    if is_strict && (data_len as u64) < header.expected_file_size() {
        return Err(BitmapError::UnexpectedEof);
    }

    Ok(())
}

/// Decode the pixel array of an already validated header.
///
/// Stored rows run bottom to top; the returned grid has the visual top row
/// first.
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    header: &BmpHeader,
    stop: &dyn Stop,
) -> Result<PixelGrid, BitmapError> {
    let width = header.width as usize;
    let height = header.height as usize;
    let bpp = header.bytes_per_pixel() as usize;
    let scanline = header.scanline_size() as usize;
    let padding = header.row_padding() as usize;

    let mut grid = PixelGrid::new(width, height);
    let mut reader = FieldReader::new(data);
    let mut row_buf = vec![0u8; scanline];

    // Once the cursor is clamped at the end, every later read is zero-filled.
    reader.seek(header.data_offset as usize);
    for stored_row in 0..height {
        if stored_row % 16 == 0 {
            stop.check()?;
        }
        reader.read_into(&mut row_buf);
        reader.skip(padding);

        let out = grid.row_mut(height - 1 - stored_row);
        for (px, bytes) in out.iter_mut().zip(row_buf.chunks_exact(bpp)) {
            *px = Pixel::new(bytes[2], bytes[1], bytes[0]);
        }
    }

    Ok(grid)
}
