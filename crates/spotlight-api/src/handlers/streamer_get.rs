use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use spotlight_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::StreamerResponse;
use crate::state::DbState;

#[derive(Debug, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
pub struct FindStreamerQuery {
    /// Exact streamer name to look up.
    pub name: Option<String>,
}

/// Look up a single streamer by exact name.
#[utoipa::path(
    get,
    path = "/api/streamer",
    tag = "streamers",
    params(FindStreamerQuery),
    responses(
        (status = 200, description = "Streamer found", body = StreamerResponse),
        (status = 400, description = "Missing name parameter", body = ErrorResponse),
        (status = 404, description = "No streamer with that name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db))]
pub async fn get_streamer(
    State(db): State<DbState>,
    Query(query): Query<FindStreamerQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput("Missing required query parameter 'name'".to_string())
        })?;

    let streamer = db
        .streamers
        .find_by_name(name)
        .await?
        .ok_or_else(|| AppError::NotFound("Streamer not found".to_string()))?;

    Ok(Json(StreamerResponse::from(streamer)))
}
