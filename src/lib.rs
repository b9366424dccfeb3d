//! Decoding and export of raw 2dseq MRI acquisitions.

pub mod logger;
pub mod mri;

pub use mri::{decode, decode_default, DecodeError, Frame, FrameDimensions, Result};
