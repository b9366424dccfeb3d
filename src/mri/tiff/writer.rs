use std::io::Write;
use crate::mri::common::error::Result;
use crate::mri::frame::types::Frame;
use crate::mri::tiff::types::ExportConfig;

pub trait FrameTiffWriter {
    fn write_frames(&self, frames: &[Frame], output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
