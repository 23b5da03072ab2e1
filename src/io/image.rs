//! Image decoding into row-major RGB pixel arrays

use crate::io::configuration::RGB_CHANNELS;
use crate::io::error::{AuthError, Result, invalid_input};
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Decode the image at `path` into a `(height, width, 3)` array
///
/// Any alpha channel is discarded and grayscale or palette images are
/// expanded to RGB, so the same file always yields the same bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The file cannot be opened or is not a decodable image
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<Array3<u8>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(invalid_input(
            "image_path",
            &"",
            &"no password image selected",
        ));
    }

    let img = image::open(path).map_err(|e| AuthError::DecodeFailure {
        path: path.to_path_buf(),
        source: e,
    })?;

    rgb_to_array(&img.to_rgb8())
}

/// Convert a decoded RGB buffer into a `(height, width, 3)` array
///
/// # Errors
///
/// Returns an error if the buffer length does not match its dimensions
pub fn rgb_to_array(img: &RgbImage) -> Result<Array3<u8>> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    // ImageBuffer stores pixels row by row with interleaved channels,
    // which is exactly the standard layout of (height, width, channels)
    Array3::from_shape_vec((height, width, RGB_CHANNELS), img.as_raw().clone()).map_err(|e| {
        invalid_input(
            "image",
            &format!("{width}x{height}"),
            &format!("pixel buffer does not match dimensions: {e}"),
        )
    })
}
