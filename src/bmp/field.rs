//! Little-endian header field reader over a byte slice.

/// Cursor over BMP bytes that reads fixed-offset little-endian fields.
///
/// Reads past the end of the data yield `0` for each missing byte instead of
/// failing, so a truncated header still produces a (usually inconsistent)
/// set of fields that the size check then rejects.
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor position, never past the end of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to `pos`, clamped to the end of the data.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    /// Seek to `offset` and read a `width`-byte little-endian unsigned integer.
    ///
    /// `width` is 1 to 4; larger widths are read as 4.
    pub fn read_uint(&mut self, offset: usize, width: usize) -> u32 {
        debug_assert!((1..=4).contains(&width), "field width {width} out of range");
        self.seek(offset);
        let mut value = 0u32;
        for i in 0..width.min(4) {
            let byte = match offset.checked_add(i).and_then(|at| self.data.get(at)) {
                Some(&b) => b,
                None => 0,
            };
            value |= u32::from(byte) << (8 * i);
        }
        self.seek(offset.saturating_add(width.min(4)));
        value
    }

    pub fn read_u16_at(&mut self, offset: usize) -> u16 {
        self.read_uint(offset, 2) as u16
    }

    pub fn read_u32_at(&mut self, offset: usize) -> u32 {
        self.read_uint(offset, 4)
    }

    /// Copy `buf.len()` bytes from the cursor, zero-filling past the end.
    /// Returns how many bytes were actually present.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let available = self.data.len().saturating_sub(self.pos).min(buf.len());
        buf[..available].copy_from_slice(&self.data[self.pos..self.pos + available]);
        buf[available..].fill(0);
        self.pos += available;
        available
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the data.
    pub fn skip(&mut self, n: usize) {
        self.seek(self.pos.saturating_add(n));
    }
}

/// One-shot little-endian read of `width` bytes at `offset`.
pub fn read_le_uint(data: &[u8], offset: usize, width: usize) -> u32 {
    FieldReader::new(data).read_uint(offset, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_fields() {
        let data = [0x42, 0x4d, 0x3a, 0x00, 0x00, 0x00, 0x18, 0x00];
        let mut reader = FieldReader::new(&data);
        assert_eq!(reader.read_uint(0, 1), 0x42);
        assert_eq!(reader.read_uint(0, 2), 0x4d42);
        assert_eq!(reader.read_u32_at(2), 58);
        assert_eq!(reader.read_u16_at(6), 24);
    }

    #[test]
    fn cursor_lands_after_field() {
        let data = [0u8; 16];
        let mut reader = FieldReader::new(&data);
        reader.read_uint(10, 4);
        assert_eq!(reader.position(), 14);
        reader.read_uint(3, 1);
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn missing_bytes_read_as_zero() {
        let data = [0xff, 0xff, 0x01];
        assert_eq!(read_le_uint(&data, 1, 4), 0x01ff);
        assert_eq!(read_le_uint(&data, 3, 4), 0);
        assert_eq!(read_le_uint(&data, usize::MAX, 2), 0);

        let mut reader = FieldReader::new(&data);
        reader.read_uint(2, 4);
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn read_into_zero_fills() {
        let data = [1u8, 2, 3];
        let mut reader = FieldReader::new(&data);
        reader.seek(1);
        let mut buf = [9u8; 4];
        assert_eq!(reader.read_into(&mut buf), 2);
        assert_eq!(buf, [2, 3, 0, 0]);
        assert_eq!(reader.read_into(&mut buf), 0);
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn skip_clamps_to_end() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = FieldReader::new(&data);
        reader.skip(2);
        let mut buf = [0u8; 1];
        reader.read_into(&mut buf);
        assert_eq!(buf, [3]);
        reader.skip(usize::MAX);
        assert_eq!(reader.position(), data.len());
    }
}
