use alloc::string::String;
use enough::StopReason;

use crate::tex::TextureFormat;

/// Errors from `.tex` decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TexError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unsupported texture format: {0:?}")]
    UnsupportedFormat(TextureFormat),

    #[error("truncated pixel data: need {needed} bytes at offset {offset}, {available} available")]
    TruncatedPixelData {
        offset: u32,
        needed: usize,
        available: usize,
    },

    #[error("pixel buffer is {actual} bytes, dimensions require {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for TexError {
    fn from(r: StopReason) -> Self {
        TexError::Cancelled(r)
    }
}
