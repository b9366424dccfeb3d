use std::io::Write;
use tracing::debug;
use crate::mri::common::error::{Result, DecodeError};
use crate::mri::frame::types::Frame;
use crate::mri::tiff::types::{ExportConfig, TiffCompression};
use crate::mri::tiff::writer::FrameTiffWriter;

/// Writes every frame as one Gray16 page of a single TIFF file.
pub struct StandardTiffWriter;

impl FrameTiffWriter for StandardTiffWriter {
    fn write_frames(&self, frames: &[Frame], output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        if frames.is_empty() {
            return Err(DecodeError::EncodeError("cannot write a TIFF without frames".to_string()));
        }

        debug!("Encoding {} TIFF pages", frames.len());

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut buffer = Vec::new();
        {
            let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
                .map_err(|e| DecodeError::EncodeError(e.to_string()))?
                .with_compression(compression);

            if let Some(predictor_val) = config.predictor {
                let predictor = match predictor_val {
                    2 => tiff::tags::Predictor::Horizontal,
                    _ => tiff::tags::Predictor::None,
                };
                encoder = encoder.with_predictor(predictor);
            }

            for (index, frame) in frames.iter().enumerate() {
                debug!("Encoding page {}: {}x{}", index, frame.width(), frame.height());
                encoder.write_image::<tiff::encoder::colortype::Gray16>(
                    frame.width() as u32,
                    frame.height() as u32,
                    frame.data(),
                ).map_err(|e| DecodeError::EncodeError(e.to_string()))?;
            }
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_pages(bytes: Vec<u8>) -> Vec<(u32, u32, Vec<u16>)> {
        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes)).unwrap();
        let mut pages = Vec::new();
        loop {
            let (width, height) = decoder.dimensions().unwrap();
            match decoder.read_image().unwrap() {
                tiff::decoder::DecodingResult::U16(data) => pages.push((width, height, data)),
                _ => panic!("expected 16-bit page"),
            }
            if !decoder.more_images() {
                break;
            }
            decoder.next_image().unwrap();
        }
        pages
    }

    #[test]
    fn test_pages_written_in_order() {
        let frames = vec![
            Frame::from_rows(&[[1u16, 2, 3], [4, 5, 6]]).unwrap(),
            Frame::from_rows(&[[600u16, 500, 400], [300, 200, 100]]).unwrap(),
        ];
        let mut output = Vec::new();

        StandardTiffWriter
            .write_frames(&frames, &mut output, &ExportConfig::default())
            .unwrap();

        let pages = read_pages(output);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], (3, 2, frames[0].data().to_vec()));
        assert_eq!(pages[1], (3, 2, frames[1].data().to_vec()));
    }

    #[test]
    fn test_compressed_pages_decode_back() {
        let frame = Frame::from_rows(&[[7u16; 8]; 8]).unwrap();
        let config = ExportConfig::builder()
            .compression(TiffCompression::DeflateBalanced)
            .build();
        let mut output = Vec::new();

        StandardTiffWriter
            .write_frames(std::slice::from_ref(&frame), &mut output, &config)
            .unwrap();

        let pages = read_pages(output);
        assert_eq!(pages, vec![(8, 8, frame.into_data())]);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let mut output = Vec::new();
        let result = StandardTiffWriter.write_frames(&[], &mut output, &ExportConfig::default());
        assert!(matches!(result, Err(DecodeError::EncodeError(_))));
        assert!(output.is_empty());
    }
}
