//! Image upload pipeline service.
//!
//! Orchestrates the stages from `spotlight_processing`: validate the upload,
//! transcode HEIC/HEIF to JPEG, then resize and re-encode. Runs strictly
//! before anything touches the database.

use std::sync::Arc;

use bytes::Bytes;
use spotlight_core::AppError;
use spotlight_processing::{is_heif, HeifTranscoder, ImageNormalizer, UploadValidator};

use crate::error::{heif_conversion_error, image_conversion_error, HttpAppError};

/// Validates and normalizes uploaded streamer images.
#[derive(Clone)]
pub struct ImageService {
    validator: Arc<UploadValidator>,
    transcoder: Arc<dyn HeifTranscoder>,
}

impl ImageService {
    pub fn new(max_image_size_bytes: usize, transcoder: Arc<dyn HeifTranscoder>) -> Self {
        Self {
            validator: Arc::new(UploadValidator::new(max_image_size_bytes)),
            transcoder,
        }
    }

    /// Run the full pipeline on an uploaded file and return the stored JPEG.
    #[tracing::instrument(
        skip(self, data),
        fields(content_type = %content_type, upload_bytes = data.len())
    )]
    pub async fn process_upload(
        &self,
        content_type: &str,
        data: Bytes,
    ) -> Result<Bytes, HttpAppError> {
        self.validator.validate_upload(content_type, &data)?;

        let raster = if is_heif(content_type) {
            self.transcoder
                .to_jpeg(&data)
                .await
                .map_err(heif_conversion_error)?
        } else {
            data
        };

        // Decode/resize/encode is CPU-bound; run it off the async pool so one
        // client's image never delays another's unrelated request.
        let jpeg = tokio::task::spawn_blocking(move || ImageNormalizer::to_bounded_jpeg(&raster))
            .await
            .map_err(|e| AppError::Internal(format!("Image processing task failed: {}", e)))?
            .map_err(image_conversion_error)?;

        tracing::debug!(normalized_bytes = jpeg.len(), "Image normalized");

        Ok(jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use spotlight_core::ErrorMetadata;
    use spotlight_processing::ImageError;

    /// Transcoder stub: hands back a fixed payload or fails, no ffmpeg needed.
    struct StubTranscoder {
        result: Result<Vec<u8>, String>,
    }

    #[async_trait]
    impl HeifTranscoder for StubTranscoder {
        async fn to_jpeg(&self, _data: &[u8]) -> Result<Bytes, ImageError> {
            match &self.result {
                Ok(bytes) => Ok(Bytes::from(bytes.clone())),
                Err(msg) => Err(ImageError::Transcode(msg.clone())),
            }
        }
    }

    fn png_fixture() -> Vec<u8> {
        use image::{ImageFormat, Rgba, RgbaImage};
        let img = RgbaImage::from_pixel(10, 10, Rgba([0, 128, 255, 255]));
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    fn service_with(transcoder: StubTranscoder) -> ImageService {
        ImageService::new(5_000_000, Arc::new(transcoder))
    }

    #[tokio::test]
    async fn test_png_upload_bypasses_transcoder() {
        let service = service_with(StubTranscoder {
            result: Err("should not be called".to_string()),
        });

        let jpeg = service
            .process_upload("image/png", Bytes::from(png_fixture()))
            .await
            .unwrap();
        assert!(!jpeg.is_empty());
    }

    #[tokio::test]
    async fn test_heic_upload_goes_through_transcoder() {
        // The stub "transcodes" to a real PNG; the normalizer then re-encodes it.
        let service = service_with(StubTranscoder {
            result: Ok(png_fixture()),
        });

        let jpeg = service
            .process_upload("image/heic", Bytes::from_static(b"fake heic payload"))
            .await
            .unwrap();
        assert!(!jpeg.is_empty());
    }

    #[tokio::test]
    async fn test_transcoder_failure_maps_to_heif_conversion() {
        let service = service_with(StubTranscoder {
            result: Err("ffmpeg exploded".to_string()),
        });

        let err = service
            .process_upload("image/heic", Bytes::from_static(b"fake heic payload"))
            .await
            .unwrap_err();
        assert_eq!(err.0.http_status_code(), 500);
        assert_eq!(err.0.client_message(), "Error converting HEIC file to JPEG");
    }

    #[tokio::test]
    async fn test_undecodable_upload_maps_to_image_conversion() {
        let service = service_with(StubTranscoder {
            result: Err("unused".to_string()),
        });

        let err = service
            .process_upload("image/jpeg", Bytes::from_static(b"not an image"))
            .await
            .unwrap_err();
        assert_eq!(err.0.http_status_code(), 500);
        assert_eq!(
            err.0.client_message(),
            "Error converting image file to JPEG"
        );
    }

    #[tokio::test]
    async fn test_disallowed_content_type_rejected_before_decoding() {
        let service = service_with(StubTranscoder {
            result: Err("unused".to_string()),
        });

        let err = service
            .process_upload("image/gif", Bytes::from(png_fixture()))
            .await
            .unwrap_err();
        assert_eq!(err.0.http_status_code(), 400);
        assert_eq!(err.0.client_message(), "Invalid file type.");
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let transcoder = StubTranscoder {
            result: Err("unused".to_string()),
        };
        let service = ImageService::new(16, Arc::new(transcoder));

        let err = service
            .process_upload("image/png", Bytes::from(vec![0u8; 64]))
            .await
            .unwrap_err();
        assert_eq!(err.0.http_status_code(), 400);
    }
}
