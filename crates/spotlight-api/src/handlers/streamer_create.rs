use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use spotlight_core::models::NewStreamer;
use spotlight_core::AppError;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::StreamerResponse;
use crate::services::image::ImageService;
use crate::state::DbState;
use crate::utils::multipart::CreateStreamerForm;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateStreamerResponse {
    pub streamer: StreamerResponse,
}

/// Create a streamer from a multipart form.
///
/// The name must be unique. An attached image runs through the full pipeline
/// (validate, HEIC transcode when needed, resize, JPEG re-encode) before
/// anything is written to the database.
#[utoipa::path(
    post,
    path = "/api/streamer",
    tag = "streamers",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Streamer created", body = CreateStreamerResponse),
        (status = 400, description = "Duplicate name or invalid form data", body = ErrorResponse),
        (status = 500, description = "Image conversion or storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db, images, multipart))]
pub async fn create_streamer(
    State(db): State<DbState>,
    State(images): State<ImageService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = CreateStreamerForm::from_multipart(multipart).await?;

    // Pre-check keeps the common duplicate case off the image pipeline; the
    // unique index still closes the race on concurrent creates.
    if db.streamers.find_by_name(&form.name).await?.is_some() {
        return Err(HttpAppError::from(AppError::DuplicateName(form.name)));
    }

    let image = match form.image {
        Some(upload) => {
            let jpeg = images
                .process_upload(&upload.content_type, upload.data)
                .await?;
            Some(jpeg.to_vec())
        }
        None => None,
    };

    let streamer = db
        .streamers
        .create(NewStreamer {
            name: form.name,
            description: form.description,
            platforms: form.platforms,
            image,
        })
        .await?;

    tracing::info!(streamer_id = %streamer.id, streamer_name = %streamer.name, "Streamer created");

    Ok((
        StatusCode::CREATED,
        Json(CreateStreamerResponse {
            streamer: streamer.into(),
        }),
    ))
}
