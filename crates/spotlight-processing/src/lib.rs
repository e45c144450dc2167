//! Upload validation and image processing for Spotlight.
//!
//! Uploaded streamer images pass through two stages: validation
//! (content type allowlist, size ceiling) and normalization (optional
//! HEIC transcode, bounded resize, JPEG re-encode).

pub mod image;
pub mod validator;

pub use image::{
    FfmpegTranscoder, HeifTranscoder, ImageError, ImageNormalizer, JPEG_QUALITY, MAX_IMAGE_HEIGHT,
    MAX_IMAGE_WIDTH,
};
pub use validator::{is_heif, normalize_mime_type, UploadValidator, ValidationError};
