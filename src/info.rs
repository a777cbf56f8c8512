use crate::bmp::{BmpHeader, parse_bmp_header};
use crate::error::BitmapError;

/// Header metadata of a BMP, read without decoding pixels.
///
/// Values are reported as stored; use [`ImageInfo::is_consistent`] for the
/// file size check the decoder applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Byte offset of the first stored pixel row.
    pub data_offset: u32,
    /// File size declared in the header.
    pub file_size: u32,
    /// Unpadded bytes per stored row.
    pub scanline_size: u64,
    /// Zero bytes after each stored row.
    pub row_padding: u64,
    expected_file_size: u64,
}

impl ImageInfo {
    /// Probe BMP header fields.
    ///
    /// Fails only when the input is too short to hold a file header and an
    /// info header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        if data.len() < 54 {
            return Err(BitmapError::UnexpectedEof);
        }
        Ok(Self::from_header(&parse_bmp_header(data)))
    }

    pub(crate) fn from_header(header: &BmpHeader) -> Self {
        Self {
            width: header.width,
            height: header.height,
            bits_per_pixel: header.bits_per_pixel,
            data_offset: header.data_offset,
            file_size: header.file_size,
            scanline_size: header.scanline_size(),
            row_padding: header.row_padding(),
            expected_file_size: header.expected_file_size(),
        }
    }

    /// Whether the declared file size matches the pixel geometry.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.file_size) == self.expected_file_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_rejected() {
        assert!(matches!(
            ImageInfo::from_bytes(b"BM\x00\x00"),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn probe_reads_fields() {
        let mut data = vec![0u8; 54 + 8];
        data[0] = b'B';
        data[1] = b'M';
        data[2..6].copy_from_slice(&62u32.to_le_bytes());
        data[10..14].copy_from_slice(&54u32.to_le_bytes());
        data[18..22].copy_from_slice(&1u32.to_le_bytes());
        data[22..26].copy_from_slice(&2u32.to_le_bytes());
        data[28..30].copy_from_slice(&24u16.to_le_bytes());
        let info = ImageInfo::from_bytes(&data).unwrap();
        assert_eq!(info.width, 1);
        assert_eq!(info.height, 2);
        assert_eq!(info.bits_per_pixel, 24);
        assert_eq!(info.scanline_size, 3);
        assert_eq!(info.row_padding, 1);
        assert!(info.is_consistent());

        data[2] = 63;
        assert!(!ImageInfo::from_bytes(&data).unwrap().is_consistent());
    }
}
