//! Stream helpers (`std` feature).

use std::io::{Read, Write};

use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::TexError;
use crate::pixel::PixelLayout;

/// Read a whole `.tex` stream and decode it to RGBA8.
///
/// Mip offsets are file-relative, so the reader must be positioned at the
/// start of the file.
pub fn decode_reader(
    mut reader: impl Read,
    stop: impl Stop,
) -> Result<DecodeOutput<'static>, TexError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let decoded = crate::tex::decode(&data, None, &stop)?;
    Ok(decoded.into_owned())
}

/// Encode RGBA8 pixels and write the `.tex` file to `writer`.
///
/// Nothing is written if encoding fails.
pub fn encode_to_writer(
    mut writer: impl Write,
    pixels: &[u8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<(), TexError> {
    let encoded = crate::tex::encode(pixels, width, height, PixelLayout::Rgba8, &stop)?;
    writer.write_all(&encoded)?;
    Ok(())
}
