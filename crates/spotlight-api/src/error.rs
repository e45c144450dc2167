//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` (or types that implement `Into<AppError>`) for errors and `?` so they
//! become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spotlight_core::{AppError, ErrorMetadata, LogLevel};
use spotlight_processing::{ImageError, ValidationError};
use utoipa::ToSchema;

/// Wire shape of every error body: a client-safe message plus a
/// machine-readable code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from spotlight-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

/// Convert JSON body deserialization failures into a 400. The vote endpoint is
/// the only JSON body we accept, and its contract is a bare "Invalid request".
impl From<JsonRejection> for HttpAppError {
    fn from(_rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput("Invalid request".to_string()))
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::FileTooLarge { size, max } => AppError::FileTooLarge { size, max },
            ValidationError::UnsupportedContentType(content_type) => {
                AppError::UnsupportedMediaType(content_type)
            }
            ValidationError::EmptyFile => AppError::InvalidInput("File is empty".to_string()),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let detail = error.detailed_message();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %detail, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %detail, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %detail, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // The body carries the client message only; the source chain already
        // went to the log above.
        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}

/// Maps image pipeline failures to the conversion error taxonomy. The caller
/// must say which pipeline stage it was in because the two stages carry
/// distinct fixed client messages.
pub fn heif_conversion_error(err: ImageError) -> AppError {
    AppError::HeifConversion(err.to_string())
}

pub fn image_conversion_error(err: ImageError) -> AppError {
    AppError::ImageConversion(err.to_string())
}
