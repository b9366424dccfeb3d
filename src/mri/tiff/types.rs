//! Frame export configuration types

use crate::mri::frame::types::FrameDimensions;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// Configuration for 2dseq to TIFF export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Geometry used to slice the raw stream
    pub dimensions: FrameDimensions,
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether an acquisition without a single complete frame is an error
    pub require_frames: bool,
    /// Whether to collect per-step timings
    pub collect_timings: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dimensions: FrameDimensions::default(),
            compression: TiffCompression::None,
            predictor: None,
            require_frames: true,
            collect_timings: false,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    dimensions: Option<FrameDimensions>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    require_frames: Option<bool>,
    collect_timings: Option<bool>,
}

impl ExportConfigBuilder {
    pub fn dimensions(mut self, dimensions: FrameDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn require_frames(mut self, require: bool) -> Self {
        self.require_frames = Some(require);
        self
    }

    pub fn collect_timings(mut self, enable: bool) -> Self {
        self.collect_timings = Some(enable);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            dimensions: self.dimensions.unwrap_or(default.dimensions),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            require_frames: self.require_frames.unwrap_or(default.require_frames),
            collect_timings: self.collect_timings.unwrap_or(default.collect_timings),
        }
    }
}
