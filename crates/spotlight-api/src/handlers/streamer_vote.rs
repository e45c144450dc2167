use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use spotlight_core::models::{VoteCounts, VoteKind};
use spotlight_core::AppError;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::DbState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VotePayload {
    pub vote_type: VoteKind,
}

/// Register an up- or down-vote on a streamer.
///
/// The body is validated before storage is touched: a missing or malformed
/// body, or a `voteType` other than `"up"`/`"down"`, is a 400 and never
/// changes the stored counters.
#[utoipa::path(
    put,
    path = "/api/streamer/{id}",
    tag = "streamers",
    params(
        ("id" = Uuid, Path, description = "Streamer id")
    ),
    request_body = VotePayload,
    responses(
        (status = 200, description = "Updated vote counters", body = VoteCounts),
        (status = 400, description = "Invalid id or vote payload", body = ErrorResponse),
        (status = 404, description = "No streamer with that id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db, payload))]
pub async fn vote_streamer(
    State(db): State<DbState>,
    Path(id): Path<String>,
    payload: Result<Json<VotePayload>, JsonRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let Json(payload) = payload?;

    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::InvalidInput("Invalid streamer id".to_string()))?;

    let streamer = db
        .streamers
        .increment_vote(id, payload.vote_type)
        .await?
        .ok_or_else(|| AppError::NotFound("Streamer not found".to_string()))?;

    tracing::debug!(
        streamer_id = %streamer.id,
        up = streamer.votes.up,
        down = streamer.votes.down,
        "Vote recorded"
    );

    Ok(Json(streamer.votes))
}
