use tracing::{info, instrument};
use std::io::{Read, Write};
use std::path::Path;

use crate::mri::{
    common::error::{DecodeError, Result},
    conversions::timing::{StepTimings, Timer},
    frame::{Frame, FrameDimensions, FrameReader, TwoDSeqReader},
    tiff::{FrameTiffWriter, StandardTiffWriter, ExportConfig},
};

/// Outcome of one export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub frame_count: usize,
    pub dimensions: FrameDimensions,
    pub timings: Option<StepTimings>,
}

pub struct TwoDSeqToTiffPipeline<R: FrameReader, W: FrameTiffWriter> {
    reader: R,
    writer: W,
    config: ExportConfig,
}

impl TwoDSeqToTiffPipeline<TwoDSeqReader, StandardTiffWriter> {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            reader: TwoDSeqReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: FrameReader, W: FrameTiffWriter> TwoDSeqToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ExportConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input, output))]
    pub fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<ExportSummary> {
        info!("Starting 2dseq to TIFF export");
        let dimensions = self.config.dimensions;
        let mut timings = StepTimings::new();

        let frames = {
            let _span = tracing::info_span!("decode_frames",
                width = dimensions.width(),
                height = dimensions.height()
            ).entered();
            let timer = Timer::start("decode_frames");
            let frames = self.reader.read_frames(input, dimensions)?;
            timings.record(timer);
            frames
        };

        self.encode(&frames, output, timings)
    }

    /// Exports frames that were already decoded, skipping the reader.
    #[instrument(skip(self, frames, output), fields(frames = frames.len()))]
    pub fn export_frames(&self, frames: &[Frame], output: &mut dyn Write) -> Result<ExportSummary> {
        self.encode(frames, output, StepTimings::new())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ExportSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Exporting file"
        );

        let mut input_file = {
            let _span = tracing::info_span!("open_input_file").entered();
            std::fs::File::open(input_path).map_err(|e| {
                DecodeError::SourceUnavailable(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let summary = self.convert(&mut input_file, &mut encoded).map_err(|e| match e {
            DecodeError::NoFrames(_) => DecodeError::NoFrames(input_path.display().to_string()),
            other => other,
        })?;

        write_output_file(output_path, &encoded)?;
        Ok(summary)
    }

    /// [`Self::export_frames`] into a file.
    #[instrument(skip(self, frames, output_path))]
    pub fn export_frames_file<Q: AsRef<Path>>(&self, frames: &[Frame], output_path: Q) -> Result<ExportSummary> {
        let output_path = output_path.as_ref();
        info!(output = %output_path.display(), frames = frames.len(), "Exporting frames");

        let mut encoded = Vec::new();
        let summary = self.export_frames(frames, &mut encoded)?;

        write_output_file(output_path, &encoded)?;
        Ok(summary)
    }

    fn encode(&self, frames: &[Frame], output: &mut dyn Write, mut timings: StepTimings) -> Result<ExportSummary> {
        let dimensions = self.config.dimensions;

        if frames.is_empty() && self.config.require_frames {
            return Err(DecodeError::NoFrames(format!(
                "stream for {}x{} frames",
                dimensions.width(),
                dimensions.height()
            )));
        }

        if let Some(frame) = frames
            .iter()
            .find(|f| f.shape() != (dimensions.height(), dimensions.width()))
        {
            return Err(DecodeError::InvalidDimensions(frame.width(), frame.height()));
        }

        if !frames.is_empty() {
            let _span = tracing::info_span!("encode_tiff", pages = frames.len()).entered();
            let timer = Timer::start("encode_tiff");
            self.writer.write_frames(frames, output, &self.config)?;
            timings.record(timer);
        }

        info!(
            frames = frames.len(),
            width = dimensions.width(),
            height = dimensions.height(),
            "Export complete"
        );

        Ok(ExportSummary {
            frame_count: frames.len(),
            dimensions,
            timings: self.config.collect_timings.then_some(timings),
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExportConfig) {
        self.config = config;
    }
}

/// Writes the fully encoded stack in one go so a failed export leaves no half-written file.
fn write_output_file(output_path: &Path, encoded: &[u8]) -> Result<()> {
    let _span = tracing::info_span!("write_output_file").entered();
    std::fs::write(output_path, encoded).map_err(|e| {
        DecodeError::OutputWriteError(format!("{}: {}", output_path.display(), e))
    })
}
