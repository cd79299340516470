//! Pixel body decoder: mip 0 / slice 0 of B8G8R8A8 textures.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{TexHeader, TextureFormat};
use crate::error::TexError;

/// Number of body bytes in mip 0 / slice 0.
fn mip0_len(header: &TexHeader) -> Result<usize, TexError> {
    let width = u32::from(header.width);
    let height = u32::from(header.height);
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(TexError::DimensionsTooLarge { width, height })
}

/// Locate the stored BGRA bytes of mip 0 / slice 0 within the whole file.
pub(crate) fn locate_mip0<'a>(data: &'a [u8], header: &TexHeader) -> Result<&'a [u8], TexError> {
    if header.format != TextureFormat::B8G8R8A8 {
        return Err(TexError::UnsupportedFormat(header.format));
    }
    let offset = header
        .mip_offset(0)
        .ok_or_else(|| TexError::MalformedHeader("empty mip offset table".into()))?;
    let needed = mip0_len(header)?;
    let start = offset as usize;
    start
        .checked_add(needed)
        .and_then(|end| data.get(start..end))
        .ok_or(TexError::TruncatedPixelData {
            offset,
            needed,
            available: data.len().saturating_sub(start),
        })
}

/// Swizzle stored BGRA into RGBA.
pub(crate) fn bgra_to_rgba(
    body: &[u8],
    width: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TexError> {
    let mut out = Vec::with_capacity(body.len());
    for (row_idx, row) in body.chunks_exact(width as usize * 4).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact(4) {
            out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
    }
    Ok(out)
}
