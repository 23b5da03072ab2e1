//! Spatial data structures for password images
//!
//! This module contains:
//! - The strip type holding one vertical slice of pixels
//! - Vertical segmentation of decoded images into strips

/// Vertical strip segmentation
pub mod segmenter;
/// Pixel strip type
pub mod strip;

pub use strip::Strip;
