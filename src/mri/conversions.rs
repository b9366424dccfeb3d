//! Pipeline conversions module
//!
//! This module contains orchestration logic for exporting MRI acquisitions.

mod two_dseq_to_tiff;
mod timing;


pub use two_dseq_to_tiff::{ExportSummary, TwoDSeqToTiffPipeline};
pub use timing::{StepTiming, StepTimings, Timer};
