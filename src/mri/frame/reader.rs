use std::io::Read;

use crate::mri::common::error::Result;
use crate::mri::frame::types::{FrameDimensions, FrameSequence};

pub trait FrameReader {
    fn read_frames(&self, source: &mut dyn Read, dimensions: FrameDimensions) -> Result<FrameSequence>;
}
