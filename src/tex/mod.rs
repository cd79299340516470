//! FFXIV `.tex` texture container (internal glue).
//!
//! An 80-byte header (see [`header`]) followed by the pixel body of each
//! mip level at the file-relative offsets listed in the header. Only the
//! uncompressed 32-bit B8G8R8A8 format is decoded, and only mip 0 of
//! slice 0 is read.

mod decode;
mod encode;
mod header;

pub use header::{HEADER_SIZE, MAX_MIP_LEVELS, TexHeader, TextureAttribute, TextureFormat};

use crate::decode::DecodeOutput;
use crate::error::TexError;
use crate::info::TexInfo;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use enough::Stop;

/// Probe header for TexInfo without touching pixel data.
pub(crate) fn probe_header(data: &[u8]) -> Result<TexInfo, TexError> {
    let header = TexHeader::parse(data)?;
    Ok(TexInfo {
        width: u32::from(header.width),
        height: u32::from(header.height),
        format: header.format,
        mip_levels: header.mip_levels(),
        array_size: header.array_size,
    })
}

/// Decode mip 0 / slice 0 to RGBA8.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, TexError> {
    let header = TexHeader::parse(data)?;
    check_limits(limits, &header)?;
    stop.check()?;
    let body = decode::locate_mip0(data, &header)?;
    let pixels = decode::bgra_to_rgba(body, u32::from(header.width), stop)?;
    Ok(DecodeOutput::new(Cow::Owned(pixels), header, PixelLayout::Rgba8))
}

/// Decode mip 0 / slice 0 in stored byte order (BGRA, borrowed from `data`).
pub(crate) fn decode_native<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, TexError> {
    let header = TexHeader::parse(data)?;
    check_limits(limits, &header)?;
    stop.check()?;
    let body = decode::locate_mip0(data, &header)?;
    Ok(DecodeOutput::new(Cow::Borrowed(body), header, PixelLayout::Bgra8))
}

fn check_limits(limits: Option<&Limits>, header: &TexHeader) -> Result<(), TexError> {
    match limits {
        Some(limits) => limits.check(header),
        None => Ok(()),
    }
}

/// Encode a single-mip texture.
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TexError> {
    encode::encode_tex(pixels, width, height, layout, stop)
}
