//! Image-slider plot payload
//!
//! The charting side receives every frame up front together with a slider
//! description; moving the slider swaps the displayed image client-side.

use serde::Serialize;

use crate::mri::common::error::{DecodeError, Result};
use crate::mri::frame::types::Frame;

pub const DEFAULT_PALETTE: &str = "Sunset11";
pub const SLIDER_TITLE: &str = "Select image";

/// Where the image is drawn in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub dw: f64,
    pub dh: f64,
}

impl Default for ImagePlacement {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dw: 10.0,
            dh: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderControl {
    pub title: String,
    pub start: usize,
    pub end: usize,
    pub step: usize,
    pub value: usize,
}

/// Frames plus the controls needed to browse them.
#[derive(Debug, Clone, Serialize)]
pub struct SliderPlot {
    pub palette: String,
    pub placement: ImagePlacement,
    pub slider: SliderControl,
    /// Every frame as a list of rows.
    pub images: Vec<Vec<Vec<u16>>>,
    /// The frame currently displayed.
    pub image: Vec<Vec<u16>>,
}

fn to_rows(frame: &Frame) -> Vec<Vec<u16>> {
    frame.rows().map(<[u16]>::to_vec).collect()
}

impl SliderPlot {
    /// Builds the plot showing the first frame.
    pub fn new(frames: &[Frame]) -> Result<Self> {
        let first = frames
            .first()
            .ok_or_else(|| DecodeError::NoFrames("slider plot".to_string()))?;

        Ok(Self {
            palette: DEFAULT_PALETTE.to_string(),
            placement: ImagePlacement::default(),
            slider: SliderControl {
                title: SLIDER_TITLE.to_string(),
                start: 0,
                end: frames.len(),
                step: 1,
                value: 0,
            },
            images: frames.iter().map(to_rows).collect(),
            image: to_rows(first),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.images.len()
    }

    /// Moves the slider to `index` and swaps the displayed image.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let image = self
            .images
            .get(index)
            .ok_or(DecodeError::FrameIndexOutOfRange {
                index,
                count: self.images.len(),
            })?;
        self.image = image.clone();
        self.slider.value = index;
        Ok(())
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| DecodeError::EncodeError(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DecodeError::EncodeError(e.to_string()))
    }
}
