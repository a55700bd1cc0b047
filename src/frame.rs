//! Frame representation for uncompressed video data

use crate::util::{Buffer, PixelFormat, Timestamp};
use std::fmt;

/// A frame of uncompressed video data
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Frame data (may be multiple planes)
    pub data: Vec<Buffer>,

    /// Line sizes for each plane
    pub linesize: Vec<usize>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Pixel format
    pub format: PixelFormat,

    /// Presentation timestamp
    pub pts: Timestamp,

    /// Duration
    pub duration: i64,

    /// Is keyframe
    pub keyframe: bool,

    /// Picture type (I, P, B)
    pub pict_type: PictureType,
}

impl VideoFrame {
    /// Create a new video frame with no plane storage attached
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        VideoFrame {
            data: Vec::new(),
            linesize: Vec::new(),
            width,
            height,
            format,
            pts: Timestamp::none(),
            duration: 0,
            keyframe: false,
            pict_type: PictureType::None,
        }
    }

    /// Get the number of planes
    pub fn num_planes(&self) -> usize {
        self.data.len()
    }

    /// Get a plane by index
    pub fn plane(&self, index: usize) -> Option<&Buffer> {
        self.data.get(index)
    }

    /// Copy all metadata fields from another frame, leaving pixel data
    /// and geometry untouched
    pub fn copy_props(&mut self, src: &VideoFrame) {
        self.pts = src.pts;
        self.duration = src.duration;
        self.keyframe = src.keyframe;
        self.pict_type = src.pict_type;
    }
}

/// Picture type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureType {
    /// Intra frame
    I,
    /// Predicted frame
    P,
    /// Bidirectional frame
    B,
    /// None/Unknown
    None,
}

impl fmt::Display for PictureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PictureType::I => write!(f, "I"),
            PictureType::P => write!(f, "P"),
            PictureType::B => write!(f, "B"),
            PictureType::None => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = VideoFrame::new(640, 480, PixelFormat::YUV420P);
        assert_eq!(frame.width, 640);
        assert_eq!(frame.height, 480);
        assert_eq!(frame.format, PixelFormat::YUV420P);
        assert_eq!(frame.num_planes(), 0);
        assert!(!frame.pts.is_valid());
    }

    #[test]
    fn test_copy_props() {
        let mut src = VideoFrame::new(640, 480, PixelFormat::GRAY8);
        src.pts = Timestamp::new(9000);
        src.duration = 3600;
        src.keyframe = true;
        src.pict_type = PictureType::I;

        let mut dst = VideoFrame::new(640, 480, PixelFormat::GRAY8);
        dst.copy_props(&src);

        assert_eq!(dst.pts, Timestamp::new(9000));
        assert_eq!(dst.duration, 3600);
        assert!(dst.keyframe);
        assert_eq!(dst.pict_type, PictureType::I);
    }
}
