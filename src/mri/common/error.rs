use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open source: {0}")]
    SourceUnavailable(String),

    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("No complete frames in {0}")]
    NoFrames(String),

    #[error("Frame index {index} out of range for {count} frames")]
    FrameIndexOutOfRange { index: usize, count: usize },

    #[error("Failed to encode output: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
