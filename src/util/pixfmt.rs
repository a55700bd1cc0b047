//! Pixel format definitions

use std::fmt;

/// Pixel format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// RGB24 - 8 bits per component, packed
    RGB24,
    /// RGBA - RGB with alpha channel
    RGBA,
    /// YUV420P - Planar YUV 4:2:0
    YUV420P,
    /// YUV422P - Planar YUV 4:2:2
    YUV422P,
    /// YUV444P - Planar YUV 4:4:4
    YUV444P,
    /// GRAY8 - 8-bit grayscale
    GRAY8,
    /// Unknown format
    Unknown,
}

impl PixelFormat {
    /// Get the number of planes in this pixel format
    pub fn plane_count(&self) -> usize {
        match self {
            PixelFormat::RGB24 | PixelFormat::RGBA | PixelFormat::GRAY8 => 1,
            PixelFormat::YUV420P | PixelFormat::YUV422P | PixelFormat::YUV444P => 3,
            PixelFormat::Unknown => 0,
        }
    }

    /// Chroma subsampling as (horizontal, vertical) log2 shifts.
    ///
    /// Returns `None` for formats without separate chroma planes.
    pub fn chroma_subsampling(&self) -> Option<(u32, u32)> {
        match self {
            PixelFormat::YUV420P => Some((1, 1)),
            PixelFormat::YUV422P => Some((1, 0)),
            PixelFormat::YUV444P => Some((0, 0)),
            _ => None,
        }
    }

    /// Size of one plane as (bytes per row, number of rows) for a frame
    /// of the given dimensions. Chroma plane rows round up for odd sizes.
    ///
    /// Returns `None` if the plane index is out of range for the format.
    pub fn plane_dimensions(&self, plane: usize, width: u32, height: u32) -> Option<(usize, usize)> {
        let width = width as usize;
        let height = height as usize;

        if plane >= self.plane_count() {
            return None;
        }

        match (self, plane) {
            (PixelFormat::RGB24, 0) => Some((width * 3, height)),
            (PixelFormat::RGBA, 0) => Some((width * 4, height)),
            (PixelFormat::GRAY8, 0) => Some((width, height)),
            (_, 0) => Some((width, height)),
            _ => {
                let (hshift, vshift) = self.chroma_subsampling()?;
                let row_bytes = (width + (1 << hshift) - 1) >> hshift;
                let rows = (height + (1 << vshift) - 1) >> vshift;
                Some((row_bytes, rows))
            }
        }
    }

    /// Check if this is a planar format
    pub fn is_planar(&self) -> bool {
        matches!(
            self,
            PixelFormat::YUV420P | PixelFormat::YUV422P | PixelFormat::YUV444P
        )
    }

    /// Check if this is an RGB format
    pub fn is_rgb(&self) -> bool {
        matches!(self, PixelFormat::RGB24 | PixelFormat::RGBA)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::RGB24 => "rgb24",
            PixelFormat::RGBA => "rgba",
            PixelFormat::YUV420P => "yuv420p",
            PixelFormat::YUV422P => "yuv422p",
            PixelFormat::YUV444P => "yuv444p",
            PixelFormat::GRAY8 => "gray8",
            PixelFormat::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::Unknown
    }
}
