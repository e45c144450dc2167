//! Upload validation for streamer images.

use thiserror::Error;

/// Content types accepted for streamer image uploads.
pub const ALLOWED_IMAGE_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/heic", "image/heif"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("File size {size} exceeds maximum allowed size {max}")]
    FileTooLarge { size: usize, max: usize },
    #[error("Content type '{0}' is not allowed")]
    UnsupportedContentType(String),
    #[error("File is empty")]
    EmptyFile,
}

/// Validates uploaded image files before they enter the processing pipeline.
pub struct UploadValidator {
    max_file_size: usize,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self {
            max_file_size,
            allowed_content_types: ALLOWED_IMAGE_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate content type against the allowlist. Compares the normalized
    /// MIME type only (no parameter bypass).
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();

        if !self.allowed_content_types.iter().any(|ct| *ct == normalized) {
            return Err(ValidationError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        Ok(())
    }

    /// Run all validations on an uploaded file
    pub fn validate_upload(&self, content_type: &str, data: &[u8]) -> Result<(), ValidationError> {
        self.validate_content_type(content_type)?;
        self.validate_file_size(data.len())?;
        Ok(())
    }
}

/// Whether a content type denotes a HEIC/HEIF container that needs transcoding.
pub fn is_heif(content_type: &str) -> bool {
    matches!(
        normalize_mime_type(content_type).to_lowercase().as_str(),
        "image/heic" | "image/heif"
    )
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
