//! MRI data block module
//!
//! This module describes which attachments the MRI block handles and packages
//! decoded frames for the image-slider plot.

mod mri_block;
pub mod plot;

pub use mri_block::MriBlock;
pub use plot::{ImagePlacement, SliderControl, SliderPlot};
