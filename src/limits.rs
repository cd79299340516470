use alloc::format;

use crate::error::TexError;
use crate::tex::TexHeader;

/// Caps on the mip 0 surface a header may declare.
///
/// Checked right after the header is parsed, before the pixel body is
/// located or any output is allocated. `None` leaves that cap off, so
/// `Limits::default()` accepts every texture the format can describe.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u16>,
    pub max_height: Option<u16>,
    /// Cap on `width * height` of mip 0.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded mip 0 buffer, 4 bytes per pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject `header` if its mip 0 surface exceeds any cap.
    pub(crate) fn check(&self, header: &TexHeader) -> Result<(), TexError> {
        let pixels = u64::from(header.width) * u64::from(header.height);
        within("width", u64::from(header.width), self.max_width.map(u64::from))?;
        within("height", u64::from(header.height), self.max_height.map(u64::from))?;
        within("pixel count", pixels, self.max_pixels)?;
        within("mip 0 size in bytes", pixels * 4, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, cap: Option<u64>) -> Result<(), TexError> {
    match cap {
        Some(max) if value > max => Err(TexError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
