//! Raw MRI frame reading module
//!
//! This module decodes header-less 2dseq acquisitions into square frames.

mod reader;
mod two_dseq_reader;
pub mod types;

pub use reader::FrameReader;
pub use two_dseq_reader::{TwoDSeqReader, decode, decode_default};
pub use types::{Frame, FrameDimensions, FrameSequence, DEFAULT_FRAME_SIZE};
