use enough::StopReason;

/// Errors from BMP decoding, encoding, and grid construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("declared file size {declared} does not match computed size {expected}")]
    SizeMismatch { declared: u64, expected: u64 },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported bit depth: {0} (expected 24 or 32)")]
    UnsupportedBitDepth(u16),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("pixel grid is empty")]
    EmptyGrid,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
