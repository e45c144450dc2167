//! Error types module
//!
//! This module provides the core error types used throughout the Spotlight
//! application. All errors are unified under the `AppError` enum, which covers
//! database, validation, duplicate-name, and image-pipeline failures together
//! with how each one should be presented over HTTP.

use std::io;

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for rejected uploads and other recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DUPLICATE_NAME")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Streamer already exists: {0}")]
    DuplicateName(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: {size} bytes (limit {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("HEIC conversion error: {0}")]
    HeifConversion(String),

    #[error("Image conversion error: {0}")]
    ImageConversion(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
/// Reduces duplication in the ErrorMetadata impl; client_message stays
/// per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Database(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InvalidInput(_) => (400, "VALIDATION_ERROR", LogLevel::Debug),
        AppError::DuplicateName(_) => (400, "DUPLICATE_NAME", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::UnsupportedMediaType(_) => (400, "UNSUPPORTED_MEDIA_TYPE", LogLevel::Warn),
        AppError::FileTooLarge { .. } => (400, "FILE_TOO_LARGE", LogLevel::Warn),
        AppError::HeifConversion(_) => (500, "IMAGE_CONVERSION_ERROR", LogLevel::Error),
        AppError::ImageConversion(_) => (500, "IMAGE_CONVERSION_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log events
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Database(_) => "Database",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::DuplicateName(_) => "DuplicateName",
            AppError::NotFound(_) => "NotFound",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::HeifConversion(_) => "HeifConversion",
            AppError::ImageConversion(_) => "ImageConversion",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including the source chain (log-only).
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            // 5xx bodies carry fixed messages; detail stays in the logs.
            AppError::Database(_) => "Internal Server Error".to_string(),
            AppError::Internal(_) => "Internal Server Error".to_string(),
            AppError::InternalWithSource { .. } => "Internal Server Error".to_string(),
            AppError::HeifConversion(_) => "Error converting HEIC file to JPEG".to_string(),
            AppError::ImageConversion(_) => "Error converting image file to JPEG".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::DuplicateName(_) => "Streamer already exists".to_string(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::UnsupportedMediaType(_) => "Invalid file type.".to_string(),
            AppError::FileTooLarge { size, max } => {
                format!("File too large: {} bytes (limit {})", size, max)
            }
        }
    }
}
