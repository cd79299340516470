use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::pixel::PixelLayout;
use crate::tex::TexHeader;

/// Mip 0 / slice 0 of a decoded texture.
///
/// RGBA decodes own their pixels. Native decodes borrow the stored BGRA
/// body straight from the input file.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    header: TexHeader,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl<'a> DecodeOutput<'a> {
    pub(crate) fn new(pixels: Cow<'a, [u8]>, header: TexHeader, layout: PixelLayout) -> Self {
        Self {
            pixels,
            width: u32::from(header.width),
            height: u32::from(header.height),
            header,
            layout,
        }
    }

    /// Tightly packed mip 0 pixels, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Header of the file these pixels came from, including the mip and
    /// array counts that were not decoded.
    pub fn header(&self) -> &TexHeader {
        &self.header
    }

    /// Whether the pixels still point into the input file.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Detach from the input file, copying a borrowed native body.
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput::new(
            Cow::Owned(self.pixels.into_owned()),
            self.header,
            self.layout,
        )
    }

    /// Hand the pixel buffer over, e.g. to re-encode or upload.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels.into_owned()
    }

    /// View the pixels as `P`, which must match [`Self::layout`].
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], crate::TexError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(crate::TexError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Borrow mip 0 as a 2D image of `P` without copying.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, crate::TexError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let (w, h) = self.dimensions();
        Ok(imgref::ImgRef::new(self.as_pixels()?, w, h))
    }

    /// Copy mip 0 into an owned 2D image of `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, crate::TexError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let (w, h) = self.dimensions();
        Ok(imgref::ImgVec::new(self.as_pixels::<P>()?.to_vec(), w, h))
    }

    #[cfg(feature = "imgref")]
    fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}
