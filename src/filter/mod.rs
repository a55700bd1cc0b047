//! Video filtering and processing

pub mod chain;
pub mod dejitter;

pub use chain::FilterChain;
pub use dejitter::{DejitterFilter, ReferenceMode, DEFAULT_THRESHOLD};

use crate::error::{Error, Result};
use crate::frame::VideoFrame;
use crate::util::{BufferRef, PixelFormat};

/// Filter trait for processing frames
///
/// A filter consumes its input frame; the frame is released exactly once
/// on every path, including error paths.
pub trait Filter {
    /// Process an input frame and produce output frame(s)
    fn filter(&mut self, input: VideoFrame) -> Result<Vec<VideoFrame>>;

    /// Flush any buffered frames
    fn flush(&mut self) -> Result<Vec<VideoFrame>>;
}

/// Filter descriptor
///
/// Registration metadata handed explicitly to a host graph builder.
/// There is no process-wide filter table.
#[derive(Debug, Clone)]
pub struct FilterDescriptor {
    /// Filter name
    pub name: String,

    /// Filter description
    pub description: String,

    /// Input types
    pub input_types: Vec<String>,

    /// Output types
    pub output_types: Vec<String>,
}

/// Supplies output frame storage to filters
///
/// Hosts may substitute their own pool (recycled buffers, bounded
/// memory); filters only see a fallible acquisition call.
pub trait FramePool: Send {
    /// Obtain zeroed storage for one frame, one buffer per plane, sized
    /// per the format's plane geometry
    fn get_video_buffer(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Vec<BufferRef>>;
}

/// Default frame pool allocating plane storage from the heap
pub struct HeapPool;

impl FramePool for HeapPool {
    fn get_video_buffer(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Vec<BufferRef>> {
        if format.plane_count() == 0 {
            return Err(Error::unsupported(format!(
                "cannot allocate frame storage for format {}",
                format
            )));
        }

        let mut planes = Vec::with_capacity(format.plane_count());
        for plane in 0..format.plane_count() {
            let (row_bytes, rows) = format
                .plane_dimensions(plane, width, height)
                .ok_or_else(|| {
                    Error::unsupported(format!("no plane {} geometry for format {}", plane, format))
                })?;

            let size = row_bytes
                .checked_mul(rows)
                .ok_or(Error::Allocation { need: usize::MAX })?;

            planes.push(BufferRef::zeroed(size));
        }

        Ok(planes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_pool_plane_sizes() {
        let mut pool = HeapPool;
        let planes = pool
            .get_video_buffer(640, 480, PixelFormat::YUV420P)
            .unwrap();

        assert_eq!(planes.len(), 3);
        assert_eq!(planes[0].len(), 640 * 480);
        assert_eq!(planes[1].len(), 320 * 240);
        assert_eq!(planes[2].len(), 320 * 240);
    }

    #[test]
    fn test_heap_pool_rejects_unknown_format() {
        let mut pool = HeapPool;
        let result = pool.get_video_buffer(640, 480, PixelFormat::Unknown);
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }

    #[test]
    fn test_heap_pool_zeroed_storage() {
        let mut pool = HeapPool;
        let planes = pool.get_video_buffer(8, 8, PixelFormat::GRAY8).unwrap();
        assert!(planes[0].as_slice().iter().all(|&b| b == 0));
    }
}
