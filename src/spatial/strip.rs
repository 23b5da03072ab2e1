//! Vertical image strip holding a fixed-size pixel grid

use crate::io::error::{Result, StripShape, invalid_input};
use ndarray::{Array3, ArrayView3};

/// One vertical slice of a password image
///
/// Pixels are kept as a `(height, width, channels)` array of bytes. Strips
/// are compared position by position, so two strips are only comparable
/// when their shapes are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pixels: Array3<u8>,
}

impl Strip {
    /// Wrap an owned pixel array
    pub const fn new(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Rebuild a strip from its dimensions and row-major pixel bytes
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes.len()` is not `height * width * channels`
    pub fn from_raw(height: usize, width: usize, channels: usize, bytes: Vec<u8>) -> Result<Self> {
        let len = bytes.len();
        Array3::from_shape_vec((height, width, channels), bytes)
            .map(Self::new)
            .map_err(|e| {
                invalid_input(
                    "strip",
                    &format!("{height}x{width}x{channels} with {len} bytes"),
                    &e,
                )
            })
    }

    /// Rows in the strip
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Columns in the strip
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Channels per pixel
    pub fn channels(&self) -> usize {
        self.pixels.dim().2
    }

    /// Shape as (height, width, channels)
    pub fn shape(&self) -> StripShape {
        self.pixels.dim()
    }

    /// Total number of channel values
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the strip holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Borrow the pixel array
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Pixel bytes in row-major order
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }

    /// Consume the strip and return its pixel array
    pub fn into_pixels(self) -> Array3<u8> {
        self.pixels
    }
}
