//! Vertical strip segmentation of decoded images
//!
//! An image of width `W` cut into `N` strips yields strips of width
//! `floor(W / N)`. Trailing columns that do not fill a whole strip are
//! dropped, so registration and authentication images of equal size always
//! produce byte-comparable strips.

use crate::io::configuration::RGB_CHANNELS;
use crate::io::error::{Result, invalid_input};
use crate::spatial::strip::Strip;
use ndarray::{ArrayView3, s};

/// Width of each strip when an image `image_width` wide is cut into `segment_count` strips
///
/// # Errors
///
/// Returns an error if `segment_count` is zero or larger than `image_width`
pub fn strip_width(image_width: usize, segment_count: usize) -> Result<usize> {
    if segment_count == 0 {
        return Err(invalid_input(
            "segment_count",
            &segment_count,
            &"must be positive",
        ));
    }

    let width = image_width / segment_count;
    if width == 0 {
        return Err(invalid_input(
            "segment_count",
            &segment_count,
            &format!("image is only {image_width} pixels wide"),
        ));
    }

    Ok(width)
}

/// Split an RGB image into `segment_count` equal-width vertical strips
///
/// Strip `i` covers columns `[i * w, (i + 1) * w)` and every row, where
/// `w` is [`strip_width`]. The result always holds exactly `segment_count`
/// strips of identical shape.
///
/// # Errors
///
/// Returns an error if:
/// - `segment_count` is zero
/// - The image is narrower than `segment_count` pixels
/// - The image has no rows
/// - The image does not have exactly 3 channels
pub fn segment(image: ArrayView3<'_, u8>, segment_count: usize) -> Result<Vec<Strip>> {
    let (height, width, channels) = image.dim();

    if channels != RGB_CHANNELS {
        return Err(invalid_input(
            "image",
            &format!("{channels} channels"),
            &format!("expected {RGB_CHANNELS} channels"),
        ));
    }
    if height == 0 {
        return Err(invalid_input("image", &"0 rows", &"image has no rows"));
    }

    let stripe = strip_width(width, segment_count)?;

    let strips = (0..segment_count)
        .map(|i| {
            let start = i * stripe;
            Strip::new(image.slice(s![.., start..start + stripe, ..]).to_owned())
        })
        .collect();

    Ok(strips)
}
