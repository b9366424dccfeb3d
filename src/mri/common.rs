//! Common utilities module
//!
//! This module contains shared utilities used across the MRI frame pipeline.

pub mod error;

pub use error::{DecodeError, Result};
