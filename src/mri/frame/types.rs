//! Frame data types

use crate::mri::common::error::{DecodeError, Result};

/// Width and height of the standard acquisition geometry.
pub const DEFAULT_FRAME_SIZE: usize = 512;

/// Bytes per little-endian u16 sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Validated frame geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    width: usize,
    height: usize,
}

impl FrameDimensions {
    /// Rejects zero sides and geometries whose byte size does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions(width, height));
        }

        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_SAMPLE))
            .ok_or(DecodeError::InvalidDimensions(width, height))?;

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples in one frame.
    pub fn pixels(&self) -> usize {
        self.width * self.height
    }

    /// Number of bytes in one frame of the raw stream.
    pub fn frame_bytes(&self) -> usize {
        self.pixels() * BYTES_PER_SAMPLE
    }
}

impl Default for FrameDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_SIZE,
            height: DEFAULT_FRAME_SIZE,
        }
    }
}

/// One decoded image, stored row-major
///
/// Only built through [`Frame::new`] or [`Frame::from_rows`], so both sides are
/// non-zero and `data` always holds `width * height` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl Frame {
    /// Builds a frame from a row-major sample buffer of exactly `width * height` samples.
    pub fn new(dimensions: FrameDimensions, data: Vec<u16>) -> Result<Self> {
        if data.len() != dimensions.pixels() {
            return Err(DecodeError::InvalidDimensions(
                dimensions.width(),
                dimensions.height(),
            ));
        }

        Ok(Self {
            width: dimensions.width(),
            height: dimensions.height(),
            data,
        })
    }

    /// Builds a frame from equal-length rows.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let dimensions = FrameDimensions::new(width, height)?;

        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(DecodeError::InvalidDimensions(width, height));
        }

        let data = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(dimensions, data)
    }

    /// Width of the frame in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the frame in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples, `width` per row, `height` rows
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u16> {
        self.data
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u16]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.data.chunks_exact(self.width)
    }

    /// Smallest and largest sample value.
    pub fn min_max(&self) -> (u16, u16) {
        self.data
            .iter()
            .fold((u16::MAX, u16::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// Ordered frames from one decode call.
pub type FrameSequence = Vec<Frame>;
