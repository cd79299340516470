//! # zentex
//!
//! Decoder and encoder for the FFXIV `.tex` texture container.
//!
//! ## Container
//!
//! A fixed 80-byte little-endian header (format, dimensions, depth, mip
//! count, LOD offsets, and a table of file-relative mip offsets) followed
//! by the pixel body of each mip level. See [`TexHeader`] for the layout.
//!
//! ## Supported Formats
//!
//! - **B8G8R8A8** — 32-bit uncompressed, stored B,G,R,A. Decoded to RGBA8,
//!   or borrowed as-is with [`decode_native`].
//!
//! Every other format code is recognized in the header and reported as
//! [`TexError::UnsupportedFormat`].
//!
//! ## Non-Goals
//!
//! - Block-compressed formats (BC1–BC7)
//! - Mip chains and texture arrays: decode reads mip 0 of slice 0, encode
//!   writes one mip level
//! - Resizing, filtering, color management
//!
//! ## Usage
//!
//! ```no_run
//! use zentex::{PixelLayout, TexInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your .tex bytes
//!
//! // Probe without decoding
//! let info = TexInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.format);
//!
//! // Decode to RGBA8
//! let decoded = zentex::decode(data, Unstoppable)?;
//! assert_eq!(decoded.layout, PixelLayout::Rgba8);
//!
//! // Encode back
//! let encoded = zentex::encode(decoded.pixels(), decoded.width, decoded.height, Unstoppable)?;
//! # Ok::<(), zentex::TexError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod tex;

#[cfg(feature = "std")]
mod io;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeOutput;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::TexError;
pub use info::TexInfo;
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use tex::{HEADER_SIZE, MAX_MIP_LEVELS, TexHeader, TextureAttribute, TextureFormat};

#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;

#[cfg(feature = "std")]
pub use io::{decode_reader, encode_to_writer};

/// Decode a `.tex` file to RGBA8 pixels (mip 0, slice 0).
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput<'_>, TexError> {
    tex::decode(data, None, &stop)
}

/// Decode a `.tex` file to RGBA8 pixels, rejecting textures over `limits`.
pub fn decode_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput<'a>, TexError> {
    tex::decode(data, Some(limits), &stop)
}

/// Decode a `.tex` file without channel swizzle.
///
/// The returned pixels are BGRA8 borrowed directly from `data`.
pub fn decode_native(data: &[u8], stop: impl Stop) -> Result<DecodeOutput<'_>, TexError> {
    tex::decode_native(data, None, &stop)
}

/// Encode RGBA8 pixels as a single-mip B8G8R8A8 `.tex` file.
///
/// `pixels` must hold exactly `width * height * 4` bytes.
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, TexError> {
    tex::encode(pixels, width, height, PixelLayout::Rgba8, &stop)
}

/// Encode BGRA8 pixels as a single-mip B8G8R8A8 `.tex` file (no swizzle).
pub fn encode_bgra(
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, TexError> {
    tex::encode(pixels, width, height, PixelLayout::Bgra8, &stop)
}

/// Encode typed RGBA8 pixels as a single-mip B8G8R8A8 `.tex` file.
#[cfg(feature = "rgb")]
pub fn encode_pixels(
    pixels: &[rgb::RGBA8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, TexError> {
    use rgb::ComponentBytes as _;
    tex::encode(pixels.as_bytes(), width, height, PixelLayout::Rgba8, &stop)
}
