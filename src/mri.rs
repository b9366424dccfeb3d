//! MRI frame pipeline module
//!
//! Decoding of raw 2dseq acquisitions into frames, TIFF export of the
//! resulting stacks, and the MRI block that hands frames to the plot.

pub mod frame;
pub mod tiff;
pub mod conversions;
pub mod block;
pub mod common;

pub use common::{
    DecodeError,
    Result,
};

pub use frame::{
    decode,
    decode_default,
    Frame,
    FrameDimensions,
    FrameReader,
    FrameSequence,
    TwoDSeqReader,
};

pub use tiff::{
    TiffCompression,
    ExportConfig,
    ExportConfigBuilder,
    FrameTiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    ExportSummary,
    StepTimings,
    TwoDSeqToTiffPipeline,
};

pub use block::{
    MriBlock,
    SliderPlot,
};
