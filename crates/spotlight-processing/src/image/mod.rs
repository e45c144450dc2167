//! Image processing module
//!
//! This module provides the upload image pipeline:
//! - HEIC/HEIF to JPEG transcoding (heif)
//! - Bounded resize and JPEG re-encode (normalizer)

pub mod heif;
pub mod normalizer;

pub use heif::{FfmpegTranscoder, HeifTranscoder};
pub use normalizer::{ImageNormalizer, JPEG_QUALITY, MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode image as JPEG: {0}")]
    Encode(#[source] image::ImageError),
    #[error("HEIC transcode failed: {0}")]
    Transcode(String),
    #[error("Image pipeline I/O error: {0}")]
    Io(#[from] std::io::Error),
}
