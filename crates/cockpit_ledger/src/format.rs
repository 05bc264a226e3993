//! Texel byte-size table
//!
//! Maps (pixel format, component type) pairs to the number of bytes one
//! texel occupies. The enum discriminants are the OpenGL enum values, so
//! raw `GLenum`s coming from a GL layer convert with `TryFrom<u32>`.

use crate::error::LedgerError;

/// Pixel layout of a texture (the GL `format` argument).
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    StencilIndex = 0x1901,
    DepthComponent = 0x1902,
    Red = 0x1903,
    Green = 0x1904,
    Blue = 0x1905,
    Alpha = 0x1906,
    Rgb = 0x1907,
    Rgba = 0x1908,
    Luminance = 0x1909,
    LuminanceAlpha = 0x190A,
    Bgr = 0x80E0,
    Bgra = 0x80E1,
    Rg = 0x8227,
    DepthStencil = 0x84F9,
}

impl PixelFormat {
    pub fn channels(&self) -> u32 {
        match self {
            PixelFormat::StencilIndex
            | PixelFormat::DepthComponent
            | PixelFormat::Red
            | PixelFormat::Green
            | PixelFormat::Blue
            | PixelFormat::Alpha
            | PixelFormat::Luminance => 1,
            PixelFormat::LuminanceAlpha | PixelFormat::Rg | PixelFormat::DepthStencil => 2,
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Bgra => 4,
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = LedgerError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        let format = match raw {
            0x1901 => PixelFormat::StencilIndex,
            0x1902 => PixelFormat::DepthComponent,
            0x1903 => PixelFormat::Red,
            0x1904 => PixelFormat::Green,
            0x1905 => PixelFormat::Blue,
            0x1906 => PixelFormat::Alpha,
            0x1907 => PixelFormat::Rgb,
            0x1908 => PixelFormat::Rgba,
            0x1909 => PixelFormat::Luminance,
            0x190A => PixelFormat::LuminanceAlpha,
            0x80E0 => PixelFormat::Bgr,
            0x80E1 => PixelFormat::Bgra,
            0x8227 => PixelFormat::Rg,
            0x84F9 => PixelFormat::DepthStencil,
            other => return Err(LedgerError::UnknownPixelFormat(other)),
        };
        Ok(format)
    }
}

/// Per-channel data type of a texture (the GL `type` argument).
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Byte = 0x1400,
    UnsignedByte = 0x1401,
    Short = 0x1402,
    UnsignedShort = 0x1403,
    Int = 0x1404,
    UnsignedInt = 0x1405,
    Float = 0x1406,
    HalfFloat = 0x140B,
    UnsignedShort4444 = 0x8033,
    UnsignedShort5551 = 0x8034,
    UnsignedInt8888 = 0x8035,
    UnsignedShort565 = 0x8363,
    UnsignedInt2101010Rev = 0x8368,
    UnsignedInt248 = 0x84FA,
}

impl ComponentType {
    /// Bytes per texel for packed types, which encode every channel at once.
    fn packed_size(&self) -> Option<u32> {
        match self {
            ComponentType::UnsignedShort4444
            | ComponentType::UnsignedShort5551
            | ComponentType::UnsignedShort565 => Some(2),
            ComponentType::UnsignedInt8888
            | ComponentType::UnsignedInt2101010Rev
            | ComponentType::UnsignedInt248 => Some(4),
            _ => None,
        }
    }

    fn channel_size(&self) -> Option<u32> {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => Some(1),
            ComponentType::Short | ComponentType::UnsignedShort | ComponentType::HalfFloat => {
                Some(2)
            }
            ComponentType::Int | ComponentType::UnsignedInt | ComponentType::Float => Some(4),
            _ => None,
        }
    }
}

impl TryFrom<u32> for ComponentType {
    type Error = LedgerError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        let component = match raw {
            0x1400 => ComponentType::Byte,
            0x1401 => ComponentType::UnsignedByte,
            0x1402 => ComponentType::Short,
            0x1403 => ComponentType::UnsignedShort,
            0x1404 => ComponentType::Int,
            0x1405 => ComponentType::UnsignedInt,
            0x1406 => ComponentType::Float,
            0x140B => ComponentType::HalfFloat,
            0x8033 => ComponentType::UnsignedShort4444,
            0x8034 => ComponentType::UnsignedShort5551,
            0x8035 => ComponentType::UnsignedInt8888,
            0x8363 => ComponentType::UnsignedShort565,
            0x8368 => ComponentType::UnsignedInt2101010Rev,
            0x84FA => ComponentType::UnsignedInt248,
            other => return Err(LedgerError::UnknownComponentType(other)),
        };
        Ok(component)
    }
}

/// Bytes occupied by one texel of `format` stored as `component`.
pub fn bytes_per_texel(format: PixelFormat, component: ComponentType) -> Result<u32, LedgerError> {
    let unsupported = || LedgerError::UnsupportedTexelLayout { format, component };

    if let Some(size) = component.packed_size() {
        let compatible = match component {
            ComponentType::UnsignedShort565 => {
                matches!(format, PixelFormat::Rgb | PixelFormat::Bgr)
            }
            ComponentType::UnsignedInt248 => format == PixelFormat::DepthStencil,
            _ => matches!(format, PixelFormat::Rgba | PixelFormat::Bgra),
        };
        return if compatible {
            Ok(size)
        } else {
            Err(unsupported())
        };
    }

    // Depth-stencil only exists in packed form.
    if format == PixelFormat::DepthStencil {
        return Err(unsupported());
    }

    let channel = component.channel_size().ok_or_else(unsupported)?;
    Ok(format.channels() * channel)
}

/// Total bytes of a `width` x `height` texture.
pub fn texture_bytes(
    format: PixelFormat,
    component: ComponentType,
    width: u32,
    height: u32,
) -> Result<u64, LedgerError> {
    let texel = u64::from(bytes_per_texel(format, component)?);
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|texels| texels.checked_mul(texel))
        .ok_or(LedgerError::TextureTooLarge { width, height })
}
