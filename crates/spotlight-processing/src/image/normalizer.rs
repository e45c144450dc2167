//! Image normalization: decode, bounded resize, JPEG re-encode.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::image::ImageError;

/// Bounding box uploaded images are shrunk into.
pub const MAX_IMAGE_WIDTH: u32 = 600;
pub const MAX_IMAGE_HEIGHT: u32 = 800;

/// Quality used when re-encoding as JPEG.
pub const JPEG_QUALITY: u8 = 80;

/// Normalizes uploaded images into bounded JPEGs for storage.
pub struct ImageNormalizer;

impl ImageNormalizer {
    /// Decode image data, shrink it to fit within the bounding box
    /// (aspect ratio preserved, never enlarged) and re-encode as JPEG.
    pub fn to_bounded_jpeg(data: &[u8]) -> Result<Bytes, ImageError> {
        let cursor = Cursor::new(data);
        let img = ImageReader::new(cursor)
            .with_guessed_format()?
            .decode()
            .map_err(ImageError::Decode)?;

        let resized = Self::shrink_to_fit(img);
        Self::encode_jpeg(&resized)
    }

    /// Resize to fit within the bounding box. Images already inside the box
    /// are returned untouched.
    fn shrink_to_fit(img: DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        if width <= MAX_IMAGE_WIDTH && height <= MAX_IMAGE_HEIGHT {
            return img;
        }

        img.resize(MAX_IMAGE_WIDTH, MAX_IMAGE_HEIGHT, FilterType::Lanczos3)
    }

    fn encode_jpeg(img: &DynamicImage) -> Result<Bytes, ImageError> {
        // JPEG has no alpha channel; flatten before encoding.
        let rgb = img.to_rgb8();

        let (width, height) = rgb.dimensions();
        let estimated_size = width as usize * height as usize / 4;
        let mut buffer = Vec::with_capacity(estimated_size);
        let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
        rgb.write_with_encoder(encoder).map_err(ImageError::Encode)?;

        Ok(Bytes::from(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    fn decoded_dimensions(jpeg: &[u8]) -> (u32, u32) {
        let img = ImageReader::new(Cursor::new(jpeg))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        img.dimensions()
    }

    #[test]
    fn test_output_is_jpeg() {
        let jpeg = ImageNormalizer::to_bounded_jpeg(&png_image(100, 100)).unwrap();

        let format = ImageReader::new(Cursor::new(&jpeg))
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_small_image_is_not_enlarged() {
        let jpeg = ImageNormalizer::to_bounded_jpeg(&png_image(100, 150)).unwrap();
        assert_eq!(decoded_dimensions(&jpeg), (100, 150));
    }

    #[test]
    fn test_wide_image_is_bounded_by_width() {
        let jpeg = ImageNormalizer::to_bounded_jpeg(&png_image(1200, 800)).unwrap();

        let (width, height) = decoded_dimensions(&jpeg);
        assert_eq!(width, 600);
        assert_eq!(height, 400); // Aspect ratio preserved
    }

    #[test]
    fn test_tall_image_is_bounded_by_height() {
        let jpeg = ImageNormalizer::to_bounded_jpeg(&png_image(600, 1600)).unwrap();

        let (width, height) = decoded_dimensions(&jpeg);
        assert_eq!(width, 300); // Aspect ratio preserved
        assert_eq!(height, 800);
    }

    #[test]
    fn test_image_at_exact_bounds_is_untouched() {
        let jpeg = ImageNormalizer::to_bounded_jpeg(&png_image(600, 800)).unwrap();
        assert_eq!(decoded_dimensions(&jpeg), (600, 800));
    }

    #[test]
    fn test_invalid_data_is_rejected() {
        let result = ImageNormalizer::to_bounded_jpeg(b"not an image");
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_empty_data_is_rejected() {
        assert!(ImageNormalizer::to_bounded_jpeg(&[]).is_err());
    }
}
