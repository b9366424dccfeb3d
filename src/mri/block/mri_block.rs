use std::path::Path;

use tracing::{info, instrument};

use crate::mri::block::plot::SliderPlot;
use crate::mri::common::error::{DecodeError, Result};
use crate::mri::frame::{FrameDimensions, FrameSequence, TwoDSeqReader};

/// In situ MRI data block.
#[derive(Debug, Clone, Copy, Default)]
pub struct MriBlock;

impl MriBlock {
    pub const BLOCK_TYPE: &'static str = "mri";
    pub const DESCRIPTION: &'static str = "In situ MRI";
    pub const ACCEPTED_FILE_EXTENSIONS: [&'static str; 2] = [".csv", "2dseq"];

    /// Whether the file name ends with one of the accepted extensions, ignoring case.
    pub fn accepts<P: AsRef<Path>>(path: P) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        Self::ACCEPTED_FILE_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(ext))
    }

    pub fn load_2dseq<P: AsRef<Path>>(path: P, dimensions: FrameDimensions) -> Result<FrameSequence> {
        TwoDSeqReader.read_file(path, dimensions)
    }

    /// Decodes the attachment with the default geometry and builds its slider plot.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn generate_plot<P: AsRef<Path>>(path: P) -> Result<SliderPlot> {
        let path = path.as_ref();
        let frames = Self::load_2dseq(path, FrameDimensions::default())?;
        if frames.is_empty() {
            return Err(DecodeError::NoFrames(path.display().to_string()));
        }

        info!(frames = frames.len(), "Generated MRI plot");
        SliderPlot::new(&frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_metadata() {
        assert_eq!(MriBlock::BLOCK_TYPE, "mri");
        assert_eq!(MriBlock::DESCRIPTION, "In situ MRI");
    }

    #[test]
    fn test_accepts_known_extensions() {
        assert!(MriBlock::accepts("scan/pdata/1/2dseq"));
        assert!(MriBlock::accepts("results.csv"));
        assert!(MriBlock::accepts("RESULTS.CSV"));
        assert!(!MriBlock::accepts("image.tiff"));
        assert!(!MriBlock::accepts(""));
    }

    #[test]
    fn test_generate_plot_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2dseq");
        let pixels = 512 * 512;
        let bytes: Vec<u8> = (0..2 * pixels + 5)
            .flat_map(|i| ((i / pixels) as u16 + 1).to_le_bytes())
            .collect();
        std::fs::write(&path, bytes).unwrap();

        let plot = MriBlock::generate_plot(&path).unwrap();

        assert_eq!(plot.frame_count(), 2);
        assert_eq!(plot.slider.end, 2);
        assert_eq!(plot.image[511][511], 1);
        assert_eq!(plot.images[1][0][0], 2);
    }

    #[test]
    fn test_generate_plot_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2dseq");
        std::fs::write(&path, [0u8; 64]).unwrap();

        assert!(matches!(
            MriBlock::generate_plot(&path),
            Err(DecodeError::NoFrames(_))
        ));
    }
}
