use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::StreamerResponse;
use crate::state::DbState;

const POPULAR_LIMIT: i64 = 5;

/// Top streamers by upvote count. An empty table answers 204, not an error.
#[utoipa::path(
    get,
    path = "/api/streamers/popular",
    tag = "streamers",
    responses(
        (status = 200, description = "Top streamers by upvotes", body = Vec<StreamerResponse>),
        (status = 204, description = "No streamers exist yet"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db))]
pub async fn popular_streamers(State(db): State<DbState>) -> Result<Response, HttpAppError> {
    let streamers = db.streamers.top_by_upvotes(POPULAR_LIMIT).await?;

    if streamers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let response: Vec<StreamerResponse> = streamers.into_iter().map(Into::into).collect();

    Ok(Json(response).into_response())
}
