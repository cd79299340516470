//! Encoder: single-mip B8G8R8A8 textures.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{HEADER_SIZE, TexHeader, TextureFormat};
use crate::error::TexError;
use crate::pixel::PixelLayout;

/// Encode a tightly packed 4-byte-per-pixel buffer as a `.tex` file.
///
/// `Rgba8` input is swizzled to B,G,R,A; `Bgra8` input is copied as-is.
pub(crate) fn encode_tex(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TexError> {
    let (w16, h16) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(TexError::InvalidDimensions { width, height }),
    };
    let w = width as usize;
    let expected = w
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(TexError::DimensionsTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(TexError::DimensionMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    let total = expected
        .checked_add(HEADER_SIZE)
        .ok_or(TexError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(total);
    TexHeader::new_2d(w16, h16, TextureFormat::B8G8R8A8).write_to(&mut out);

    for (row_idx, row) in pixels.chunks_exact(w * 4).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        match layout {
            PixelLayout::Bgra8 => out.extend_from_slice(row),
            PixelLayout::Rgba8 => {
                for px in row.chunks_exact(4) {
                    out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
                }
            }
        }
    }

    Ok(out)
}
