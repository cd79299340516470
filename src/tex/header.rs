//! Fixed 80-byte `.tex` header.
//!
//! Layout (all fields little-endian):
//!
//! | offset | size | field |
//! |-------:|-----:|-------|
//! | 0  | 4  | attribute flags |
//! | 4  | 4  | texture format |
//! | 8  | 2  | width |
//! | 10 | 2  | height |
//! | 12 | 2  | depth |
//! | 14 | 1  | mip level count (low 7 bits) + flag (high bit) |
//! | 15 | 1  | array size |
//! | 16 | 12 | LOD offsets, 3 x i32 |
//! | 28 | 52 | mip offset table, 13 x u32, file-relative |
//!
//! Bytes 14..16 read as one u16 are the mip count of older readers; a
//! single-mip, non-array texture looks the same either way.

use alloc::format;
use alloc::vec::Vec;

use crate::error::TexError;

/// Size of the fixed header region in bytes.
pub const HEADER_SIZE: usize = 80;

/// Number of slots in the on-disk mip offset table.
pub const MAX_MIP_LEVELS: usize = 13;

/// LOD offsets written by the encoder. Reproduced as-is.
const DEFAULT_LOD_OFFSETS: [i32; 3] = [0, 1, 1];

const MIP_COUNT_MASK: u8 = 0x7F;
const MIP_FLAG_BIT: u8 = 0x80;

/// Texture kind flags stored in the first header word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureAttribute(pub u32);

impl TextureAttribute {
    pub const DISCARD_PER_FRAME: Self = Self(0x1);
    pub const DISCARD_PER_MAP: Self = Self(0x2);
    pub const MANAGED: Self = Self(0x4);
    pub const USER_MANAGED: Self = Self(0x8);
    pub const CPU_READ: Self = Self(0x10);
    pub const LOCATION_MAIN: Self = Self(0x20);
    pub const NO_GPU_READ: Self = Self(0x40);
    pub const ALIGNED_SIZE: Self = Self(0x80);
    pub const EDGE_CULLING: Self = Self(0x100);
    pub const LOCATION_ONION: Self = Self(0x200);
    pub const READ_WRITE: Self = Self(0x400);
    pub const IMMUTABLE: Self = Self(0x800);
    pub const TEXTURE_RENDER_TARGET: Self = Self(0x10_0000);
    pub const TEXTURE_DEPTH_STENCIL: Self = Self(0x20_0000);
    pub const TEXTURE_TYPE_1D: Self = Self(0x40_0000);
    pub const TEXTURE_TYPE_2D: Self = Self(0x80_0000);
    pub const TEXTURE_TYPE_3D: Self = Self(0x100_0000);
    pub const TEXTURE_TYPE_CUBE: Self = Self(0x400_0000);
    pub const TEXTURE_TYPE_2D_ARRAY: Self = Self(0x1000_0000);
    pub const TEXTURE_SWIZZLE: Self = Self(0x2000_0000);
    pub const TEXTURE_NO_TILED: Self = Self(0x4000_0000);
    pub const TEXTURE_NO_SWIZZLE: Self = Self(0x8000_0000);

    /// Raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for TextureAttribute {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Pixel encoding codes known to the container.
///
/// Only [`TextureFormat::B8G8R8A8`] is decodable. Every other code, named
/// or not, parses and is reported as unsupported when pixels are read.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    L8,
    A8,
    B4G4R4A4,
    B5G5R5A1,
    /// 32-bit uncompressed, stored B,G,R,A.
    B8G8R8A8,
    B8G8R8X8,
    R32F,
    R16G16F,
    R32G32F,
    R16G16B16A16F,
    R32G32B32A32F,
    Bc1,
    Bc2,
    Bc3,
    D16,
    D24S8,
    Null,
    Shadow16,
    Shadow24,
    Bc5,
    Bc7,
    /// Code outside the known set, kept verbatim.
    Unknown(u32),
}

impl TextureFormat {
    pub fn from_u32(code: u32) -> Self {
        match code {
            0x1130 => Self::L8,
            0x1131 => Self::A8,
            0x1440 => Self::B4G4R4A4,
            0x1441 => Self::B5G5R5A1,
            0x1450 => Self::B8G8R8A8,
            0x1451 => Self::B8G8R8X8,
            0x2150 => Self::R32F,
            0x2250 => Self::R16G16F,
            0x2260 => Self::R32G32F,
            0x2460 => Self::R16G16B16A16F,
            0x2470 => Self::R32G32B32A32F,
            0x3420 => Self::Bc1,
            0x3430 => Self::Bc2,
            0x3431 => Self::Bc3,
            0x4140 => Self::D16,
            0x4250 => Self::D24S8,
            0x5100 => Self::Null,
            0x5140 => Self::Shadow16,
            0x5150 => Self::Shadow24,
            0x6230 => Self::Bc5,
            0x6432 => Self::Bc7,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::L8 => 0x1130,
            Self::A8 => 0x1131,
            Self::B4G4R4A4 => 0x1440,
            Self::B5G5R5A1 => 0x1441,
            Self::B8G8R8A8 => 0x1450,
            Self::B8G8R8X8 => 0x1451,
            Self::R32F => 0x2150,
            Self::R16G16F => 0x2250,
            Self::R32G32F => 0x2260,
            Self::R16G16B16A16F => 0x2460,
            Self::R32G32B32A32F => 0x2470,
            Self::Bc1 => 0x3420,
            Self::Bc2 => 0x3430,
            Self::Bc3 => 0x3431,
            Self::D16 => 0x4140,
            Self::D24S8 => 0x4250,
            Self::Null => 0x5100,
            Self::Shadow16 => 0x5140,
            Self::Shadow24 => 0x5150,
            Self::Bc5 => 0x6230,
            Self::Bc7 => 0x6432,
            Self::Unknown(code) => code,
        }
    }

    /// Whether this codec can decode and encode pixel data in this format.
    pub fn is_supported(self) -> bool {
        self == Self::B8G8R8A8
    }
}

/// Parsed `.tex` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TexHeader {
    pub attribute: TextureAttribute,
    pub format: TextureFormat,
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    /// High bit of the mip count byte. Meaning unknown; preserved.
    pub mip_flag: bool,
    pub array_size: u8,
    pub lod_offsets: [i32; 3],
    mip_offsets: Vec<u32>,
}

impl TexHeader {
    /// Header for a single-mip 2D texture whose pixels follow the header.
    pub fn new_2d(width: u16, height: u16, format: TextureFormat) -> Self {
        Self {
            attribute: TextureAttribute::TEXTURE_TYPE_2D,
            format,
            width,
            height,
            depth: 1,
            mip_flag: false,
            array_size: 0,
            lod_offsets: DEFAULT_LOD_OFFSETS,
            mip_offsets: alloc::vec![HEADER_SIZE as u32],
        }
    }

    /// Replace the mip offset table. One entry per mip level, 1..=13 entries.
    pub fn with_mip_offsets(mut self, offsets: Vec<u32>) -> Result<Self, TexError> {
        check_mip_count(offsets.len())?;
        self.mip_offsets = offsets;
        Ok(self)
    }

    /// Number of mip levels declared.
    pub fn mip_levels(&self) -> usize {
        self.mip_offsets.len()
    }

    /// File-relative byte offsets of each mip level.
    pub fn mip_offsets(&self) -> &[u32] {
        &self.mip_offsets
    }

    /// File-relative byte offset of mip `level`, if declared.
    pub fn mip_offset(&self, level: usize) -> Option<u32> {
        self.mip_offsets.get(level).copied()
    }

    /// Parse the fixed header region at the start of `data`.
    ///
    /// Mip offsets are not checked against the data length here.
    pub fn parse(data: &[u8]) -> Result<Self, TexError> {
        let h: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| {
                TexError::MalformedHeader(format!(
                    "need {HEADER_SIZE} header bytes, got {}",
                    data.len()
                ))
            })?;

        let attribute = TextureAttribute(read_u32(h, 0));
        let format = TextureFormat::from_u32(read_u32(h, 4));
        let width = read_u16(h, 8);
        let height = read_u16(h, 10);
        let depth = read_u16(h, 12);
        let mip_byte = h[14];
        let array_size = h[15];

        if width == 0 || height == 0 {
            return Err(TexError::MalformedHeader(format!(
                "zero dimension {width}x{height}"
            )));
        }
        if depth == 0 {
            return Err(TexError::MalformedHeader("depth is zero".into()));
        }

        let mip_levels = usize::from(mip_byte & MIP_COUNT_MASK);
        check_mip_count(mip_levels)?;

        let lod_offsets = [read_i32(h, 16), read_i32(h, 20), read_i32(h, 24)];
        let mip_offsets = (0..mip_levels).map(|i| read_u32(h, 28 + i * 4)).collect();

        Ok(Self {
            attribute,
            format,
            width,
            height,
            depth,
            mip_flag: mip_byte & MIP_FLAG_BIT != 0,
            array_size,
            lod_offsets,
            mip_offsets,
        })
    }

    /// Append exactly [`HEADER_SIZE`] bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(&self.attribute.bits().to_le_bytes());
        out.extend_from_slice(&self.format.to_u32().to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.depth.to_le_bytes());
        // mip count is bounded by MAX_MIP_LEVELS, fits in 7 bits
        let mut mip_byte = self.mip_offsets.len() as u8 & MIP_COUNT_MASK;
        if self.mip_flag {
            mip_byte |= MIP_FLAG_BIT;
        }
        out.push(mip_byte);
        out.push(self.array_size);
        for lod in self.lod_offsets {
            out.extend_from_slice(&lod.to_le_bytes());
        }
        for &offset in &self.mip_offsets {
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.resize(start + HEADER_SIZE, 0);
    }
}

fn check_mip_count(count: usize) -> Result<(), TexError> {
    if count == 0 || count > MAX_MIP_LEVELS {
        return Err(TexError::MalformedHeader(format!(
            "mip level count {count} outside 1..={MAX_MIP_LEVELS}"
        )));
    }
    Ok(())
}

fn read_u16(h: &[u8; HEADER_SIZE], at: usize) -> u16 {
    u16::from_le_bytes([h[at], h[at + 1]])
}

fn read_u32(h: &[u8; HEADER_SIZE], at: usize) -> u32 {
    u32::from_le_bytes([h[at], h[at + 1], h[at + 2], h[at + 3]])
}

fn read_i32(h: &[u8; HEADER_SIZE], at: usize) -> i32 {
    i32::from_le_bytes([h[at], h[at + 1], h[at + 2], h[at + 3]])
}
