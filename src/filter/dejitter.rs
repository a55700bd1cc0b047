//! VHS line-jitter correction
//!
//! Unstable analog sync during VHS playback shifts individual scanlines
//! horizontally. On capture, a shifted line shows up with a longer (or
//! shorter) stretch of sync-induced garbage before the picture content
//! starts. This filter measures that leading noise run on every line,
//! compares it against a per-frame reference, and shifts the line back so
//! content lines up with its neighbors.
//!
//! ## Usage
//!
//! ```rust
//! use vhsfix::filter::{DejitterFilter, Filter};
//! use vhsfix::frame::VideoFrame;
//! use vhsfix::util::{Buffer, PixelFormat};
//!
//! let mut filter = DejitterFilter::new(24)?;
//!
//! let mut frame = VideoFrame::new(8, 1, PixelFormat::GRAY8);
//! frame.data.push(Buffer::from_vec(vec![0, 0, 200, 200, 200, 200, 200, 200]));
//! frame.linesize.push(8);
//!
//! let corrected = filter.filter(frame)?;
//! # Ok::<(), vhsfix::Error>(())
//! ```

use super::{Filter, FilterDescriptor, FramePool, HeapPool};
use crate::error::{Error, Result};
use crate::frame::VideoFrame;
use crate::util::PixelFormat;

/// Default threshold below which a pixel is considered black
pub const DEFAULT_THRESHOLD: i32 = 24;

/// Update gain for the running-mean reference
const RUNNING_MEAN_GAIN: f32 = 0.125;

/// Reference strategy for estimating where a line's content should start
///
/// Each frame is processed with fresh estimator state, so the choice only
/// affects how the reference evolves from the top of a frame to the
/// bottom, never behavior across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Track the previous corrected line's content-start position.
    ///
    /// Successful corrections leave the content start where the reference
    /// predicted, so this propagates the first line's baseline through
    /// the frame and corrects every line relative to its neighbor.
    PreviousLine,

    /// Exponential moving average of the measured noise runs.
    ///
    /// Recovers within a few lines if the top of the frame is itself
    /// jittered, at the cost of letting a strong outlier pull the
    /// reference slightly for the lines below it.
    #[default]
    RunningMean,
}

/// Removes line jitter from captured analog VHS footage
///
/// Pixels at the start of a scanline with intensity below `threshold`
/// are classified as noise rather than picture content. A line whose
/// noise run is longer than the reference is assumed to be shifted right
/// by the difference, and vice versa. Lines are corrected independently,
/// top to bottom; exposed edge pixels are filled with the nearest
/// original edge value.
///
/// Supported input formats: yuv420p, yuv422p, yuv444p, gray8. The noise
/// run is measured on the luma plane; chroma planes follow their luma
/// rows' offsets scaled by the horizontal subsampling factor.
pub struct DejitterFilter {
    threshold: i32,
    mode: ReferenceMode,
    pool: Box<dyn FramePool>,
}

impl DejitterFilter {
    /// Create a new dejitter filter
    ///
    /// `threshold` is the intensity below which a pixel at the start of a
    /// scanline is considered black; it must be non-negative. A threshold
    /// of 0 classifies no pixel as noise and disables correction.
    pub fn new(threshold: i32) -> Result<Self> {
        Self::with_reference_mode(threshold, ReferenceMode::default())
    }

    /// Create a dejitter filter with an explicit reference strategy
    pub fn with_reference_mode(threshold: i32, mode: ReferenceMode) -> Result<Self> {
        Self::with_pool(threshold, mode, Box::new(HeapPool))
    }

    /// Create a dejitter filter drawing output storage from `pool`
    pub fn with_pool(threshold: i32, mode: ReferenceMode, pool: Box<dyn FramePool>) -> Result<Self> {
        if threshold < 0 {
            return Err(Error::config(format!(
                "threshold must be non-negative, got {}",
                threshold
            )));
        }

        tracing::debug!("dejitter threshold: {}", threshold);

        Ok(DejitterFilter {
            threshold,
            mode,
            pool,
        })
    }

    /// The configured noise threshold
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// The configured reference strategy
    pub fn reference_mode(&self) -> ReferenceMode {
        self.mode
    }

    /// Registration metadata for a host graph builder
    pub fn descriptor() -> FilterDescriptor {
        FilterDescriptor {
            name: "dejitter".to_string(),
            description: "Remove line jitter on captured old VHS".to_string(),
            input_types: vec!["video".to_string()],
            output_types: vec!["video".to_string()],
        }
    }

    fn validate(&self, frame: &VideoFrame) -> Result<()> {
        if !matches!(
            frame.format,
            PixelFormat::YUV420P
                | PixelFormat::YUV422P
                | PixelFormat::YUV444P
                | PixelFormat::GRAY8
        ) {
            return Err(Error::unsupported(format!(
                "dejitter does not support {} input",
                frame.format
            )));
        }

        if frame.width == 0 || frame.height == 0 {
            return Err(Error::invalid_input("frame has zero dimensions"));
        }

        let planes = frame.format.plane_count();
        if frame.num_planes() != planes || frame.linesize.len() != planes {
            return Err(Error::invalid_input(format!(
                "expected {} planes for {}, got {} with {} linesizes",
                planes,
                frame.format,
                frame.num_planes(),
                frame.linesize.len()
            )));
        }

        for plane in 0..planes {
            let (row_bytes, rows) = frame
                .format
                .plane_dimensions(plane, frame.width, frame.height)
                .expect("plane index checked against plane_count");
            let stride = frame.linesize[plane];

            if stride < row_bytes {
                return Err(Error::invalid_input(format!(
                    "plane {} linesize {} is less than row size {}",
                    plane, stride, row_bytes
                )));
            }

            let need = (rows - 1) * stride + row_bytes;
            if frame.data[plane].len() < need {
                return Err(Error::invalid_input(format!(
                    "plane {} holds {} bytes, need {}",
                    plane,
                    frame.data[plane].len(),
                    need
                )));
            }
        }

        Ok(())
    }
}

impl Default for DejitterFilter {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD).expect("default threshold is valid")
    }
}

impl Filter for DejitterFilter {
    /// Correct one frame
    ///
    /// The input frame is consumed on every path. Output storage comes
    /// from the pool; if acquisition fails the input is dropped and
    /// [`Error::Allocation`] is returned, leaving the filter ready for
    /// the next frame.
    fn filter(&mut self, input: VideoFrame) -> Result<Vec<VideoFrame>> {
        self.validate(&input)?;

        let width = input.width as usize;
        let height = input.height as usize;

        let mut planes = self
            .pool
            .get_video_buffer(input.width, input.height, input.format)?;

        // Luma pass: measure runs, estimate offsets, shift.
        let luma = input.data[0].as_slice();
        let stride = input.linesize[0];
        let mut offsets = vec![0i32; height];
        let mut estimator = RunEstimator::new(self.mode);

        let dst = planes[0].as_mut();
        for y in 0..height {
            let src = &luma[y * stride..y * stride + width];
            let run = leading_noise_run(src, self.threshold);

            // A line entirely below threshold carries no content to
            // align; leave it and the reference alone.
            let offset = if run == width {
                0
            } else {
                estimator.offset_for(run)
            };

            offsets[y] = offset;
            shift_line(src, &mut dst[y * width..(y + 1) * width], offset);
        }

        // Chroma pass: each chroma row follows the first luma row it
        // covers, with the offset scaled down by the subsampling factor.
        if let Some((hshift, vshift)) = input.format.chroma_subsampling() {
            for plane in 1..input.format.plane_count() {
                let (row_bytes, rows) = input
                    .format
                    .plane_dimensions(plane, input.width, input.height)
                    .expect("chroma plane geometry");
                let src_plane = input.data[plane].as_slice();
                let src_stride = input.linesize[plane];
                let dst = planes[plane].as_mut();

                for cy in 0..rows {
                    let y = (cy << vshift).min(height - 1);
                    let offset = offsets[y] / (1 << hshift);
                    let src = &src_plane[cy * src_stride..cy * src_stride + row_bytes];
                    shift_line(src, &mut dst[cy * row_bytes..(cy + 1) * row_bytes], offset);
                }
            }
        }

        let mut out = VideoFrame::new(input.width, input.height, input.format);
        out.copy_props(&input);
        for plane in 0..input.format.plane_count() {
            let (row_bytes, _) = input
                .format
                .plane_dimensions(plane, input.width, input.height)
                .expect("plane geometry");
            out.linesize.push(row_bytes);
        }
        out.data = planes.into_iter().map(|p| p.freeze()).collect();

        tracing::trace!("dejittered frame at pts {}", out.pts);

        Ok(vec![out])
    }

    fn flush(&mut self) -> Result<Vec<VideoFrame>> {
        Ok(Vec::new())
    }
}

/// Per-frame reference estimator
///
/// Seeded from the first measured line, which is therefore never shifted.
struct RunEstimator {
    mode: ReferenceMode,
    reference: Option<f32>,
}

impl RunEstimator {
    fn new(mode: ReferenceMode) -> Self {
        RunEstimator {
            mode,
            reference: None,
        }
    }

    /// Offset the line must be shifted left by to line up with the
    /// reference, updating the reference for the next line
    fn offset_for(&mut self, run: usize) -> i32 {
        let run = run as f32;
        let reference = *self.reference.get_or_insert(run);
        let offset = (run - reference).round() as i32;

        match self.mode {
            ReferenceMode::PreviousLine => {
                // The corrected line's content starts at run - offset.
                self.reference = Some(run - offset as f32);
            }
            ReferenceMode::RunningMean => {
                self.reference = Some(reference + RUNNING_MEAN_GAIN * (run - reference));
            }
        }

        offset
    }
}

/// Count the leading pixels below the noise threshold
fn leading_noise_run(line: &[u8], threshold: i32) -> usize {
    line.iter()
        .take_while(|&&p| (p as i32) < threshold)
        .count()
}

/// Shift `src` horizontally by `offset` pixels into `dst`
///
/// Positive offsets shift content left, negative right. Exposed
/// positions are filled with the nearest original edge pixel (clamped,
/// not wrapped).
fn shift_line(src: &[u8], dst: &mut [u8], offset: i32) {
    let width = src.len();
    debug_assert_eq!(width, dst.len());

    if offset == 0 {
        dst.copy_from_slice(src);
        return;
    }

    let shift = offset.unsigned_abs() as usize;
    if shift >= width {
        let fill = if offset > 0 { src[width - 1] } else { src[0] };
        dst.fill(fill);
        return;
    }

    if offset > 0 {
        dst[..width - shift].copy_from_slice(&src[shift..]);
        dst[width - shift..].fill(src[width - 1]);
    } else {
        dst[shift..].copy_from_slice(&src[..width - shift]);
        dst[..shift].fill(src[0]);
    }
}
