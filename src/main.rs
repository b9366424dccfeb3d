use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mri_frames::logger;
use mri_frames::mri::{
    ExportConfig, FrameDimensions, MriBlock, SliderPlot, TiffCompression, TwoDSeqReader,
    TwoDSeqToTiffPipeline,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Compression {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<Compression> for TiffCompression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::DeflateFast => TiffCompression::DeflateFast,
            Compression::DeflateBalanced => TiffCompression::DeflateBalanced,
            Compression::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

/// Decode raw 2dseq MRI acquisitions into frames.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Raw 2dseq file
    input: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = 512)]
    width: usize,

    /// Frame height in pixels
    #[arg(long, default_value_t = 512)]
    height: usize,

    /// Write all frames as a multi-page 16-bit TIFF
    #[arg(long)]
    tiff: Option<PathBuf>,

    /// Write the image-slider plot payload as JSON
    #[arg(long)]
    plot_json: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Compression::None)]
    compression: Compression,

    /// Print the TIFF encoding time
    #[arg(long)]
    timings: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    if !MriBlock::accepts(&args.input) {
        warn!("{} is not a file the MRI block would accept", args.input.display());
    }

    let dimensions = FrameDimensions::new(args.width, args.height)?;
    let frames = TwoDSeqReader
        .read_file(&args.input, dimensions)
        .with_context(|| format!("decoding {}", args.input.display()))?;
    info!(frames = frames.len(), "Decoded {}", args.input.display());

    if let Some(output) = &args.tiff {
        let config = ExportConfig::builder()
            .dimensions(dimensions)
            .compression(args.compression.into())
            .collect_timings(args.timings)
            .build();
        let pipeline = TwoDSeqToTiffPipeline::new(config);
        let summary = pipeline
            .export_frames_file(&frames, output)
            .with_context(|| format!("exporting {}", output.display()))?;
        info!(frames = summary.frame_count, "Wrote {}", output.display());
        if let Some(timings) = summary.timings {
            println!("{timings}");
        }
    }

    if let Some(output) = &args.plot_json {
        let plot = SliderPlot::new(&frames)?;
        std::fs::write(output, plot.to_json_string()?)
            .with_context(|| format!("writing {}", output.display()))?;
        info!("Wrote plot payload to {}", output.display());
    }

    if args.tiff.is_none() && args.plot_json.is_none() {
        for (index, frame) in frames.iter().enumerate() {
            let (min, max) = frame.min_max();
            println!("frame {index:>4}: {}x{} min={min} max={max}", frame.width(), frame.height());
        }
    }

    Ok(())
}
