//! Reader for raw 2dseq MRI acquisitions.
//!
//! A 2dseq file carries no header: it is a flat run of unsigned 16-bit
//! little-endian samples. Consecutive runs of `width * height` samples form
//! one frame each, laid out row-major. Samples that cannot fill a final frame,
//! and a lone trailing byte, are dropped without error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};

use crate::mri::common::error::{DecodeError, Result};
use crate::mri::frame::reader::FrameReader;
use crate::mri::frame::types::{Frame, FrameDimensions, FrameSequence, BYTES_PER_SAMPLE};

/// Stateless 2dseq decoder.
///
/// Frames are pulled from the source one frame-sized chunk at a time, so at
/// most one partially filled frame buffer is held besides the output. The
/// buffer only grows as bytes arrive, so a short stream costs no more than
/// its own length whatever the geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoDSeqReader;

impl FrameReader for TwoDSeqReader {
    /// Decodes every complete frame available from `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - Any binary source; short reads are retried until it is exhausted
    /// * `dimensions` - Frame geometry
    ///
    /// # Returns
    ///
    /// * `Ok(FrameSequence)` - Frames in stream order, possibly empty
    /// * `Err(DecodeError::SourceUnavailable)` - The source failed mid-read
    fn read_frames(&self, source: &mut dyn Read, dimensions: FrameDimensions) -> Result<FrameSequence> {
        let frame_bytes = dimensions.frame_bytes();
        let mut buffer = Vec::new();
        let mut frames = Vec::new();
        let mut total_bytes = 0usize;

        loop {
            buffer.clear();
            let filled = Read::take(&mut *source, frame_bytes as u64)
                .read_to_end(&mut buffer)
                .map_err(|e| DecodeError::SourceUnavailable(e.to_string()))?;
            total_bytes += filled;

            if filled < frame_bytes {
                if filled > 0 {
                    debug!(
                        "Dropping {} trailing bytes after {} frames",
                        filled,
                        frames.len()
                    );
                }
                break;
            }

            let samples: Vec<u16> = buffer
                .chunks_exact(BYTES_PER_SAMPLE)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            frames.push(Frame::new(dimensions, samples)?);
        }

        debug!(
            "Decoded {} frames of {}x{} from {} bytes",
            frames.len(),
            dimensions.width(),
            dimensions.height(),
            total_bytes
        );

        Ok(frames)
    }
}

impl TwoDSeqReader {
    /// Opens `path` and decodes it with the given geometry.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn read_file<P: AsRef<Path>>(&self, path: P, dimensions: FrameDimensions) -> Result<FrameSequence> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| DecodeError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

        self.read_frames(&mut file, dimensions).map_err(|e| match e {
            DecodeError::SourceUnavailable(msg) => {
                DecodeError::SourceUnavailable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Decodes the 2dseq file at `source_path` into `width` x `height` frames.
pub fn decode<P: AsRef<Path>>(source_path: P, width: usize, height: usize) -> Result<FrameSequence> {
    let dimensions = FrameDimensions::new(width, height)?;
    TwoDSeqReader.read_file(source_path, dimensions)
}

/// [`decode`] with the 512x512 acquisition geometry.
pub fn decode_default<P: AsRef<Path>>(source_path: P) -> Result<FrameSequence> {
    TwoDSeqReader.read_file(source_path, FrameDimensions::default())
}
