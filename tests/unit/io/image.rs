//! Tests for decoding image files into RGB arrays

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use stripkey::ErrorKind;
    use stripkey::io::image::{load_rgb, rgb_to_array};

    // Tests array layout is (height, width, channel)
    // Verified by swapping width and height
    #[test]
    fn test_rgb_to_array_layout() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));

        let array = rgb_to_array(&img).unwrap();

        assert_eq!(array.dim(), (2, 3, 3));
        assert_eq!(array[(1, 2, 0)], 2);
        assert_eq!(array[(1, 2, 1)], 1);
        assert_eq!(array[(1, 2, 2)], 7);
    }

    // Tests alpha is discarded when loading
    // Verified by loading as RGBA
    #[test]
    fn test_load_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let array = load_rgb(&path).unwrap();

        assert_eq!(array.dim(), (4, 4, 3));
        assert!(array.iter().all(|&v| v == 10 || v == 20 || v == 30));
    }

    // Tests grayscale files are expanded to three channels
    // Verified by keeping the luma channel only
    #[test]
    fn test_load_expands_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        DynamicImage::new_luma8(5, 3).save(&path).unwrap();

        let array = load_rgb(&path).unwrap();
        assert_eq!(array.dim(), (3, 5, 3));
    }

    // Tests corrupt files report a decode failure
    // Verified by returning an empty array on decode errors
    #[test]
    fn test_corrupt_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        fs::write(&path, b"not an image").unwrap();

        let err = load_rgb(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    }

    // Tests an empty path is invalid input rather than a decode failure
    // Verified by passing the empty path to the decoder
    #[test]
    fn test_empty_path_is_invalid() {
        let err = load_rgb("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
