use crate::error::TexError;
use crate::tex::TextureFormat;

/// Texture metadata read from the header alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TexInfo {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Declared mip level count (1..=13).
    pub mip_levels: usize,
    pub array_size: u8,
}

impl TexInfo {
    /// Probe the header without decoding or validating pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TexError> {
        crate::tex::probe_header(data)
    }

    /// Whether [`crate::decode`] can handle this texture's format.
    pub fn is_decodable(&self) -> bool {
        self.format.is_supported()
    }
}
