//! TIFF export module
//!
//! This module writes decoded frame sequences as multi-page 16-bit TIFF stacks.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::FrameTiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, ExportConfig, ExportConfigBuilder};
