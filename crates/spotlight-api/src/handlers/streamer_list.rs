use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::StreamerResponse;
use crate::state::DbState;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Pagination parameters. Deliberately lenient: absent or non-numeric values
/// fall back to the defaults instead of rejecting the request.
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationQuery {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Records per page (default 10, maximum 100).
    pub limit: Option<String>,
}

impl PaginationQuery {
    fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE).max(1)
    }

    fn limit(&self) -> i64 {
        parse_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

fn total_pages(total_documents: i64, page_size: i64) -> i64 {
    (total_documents + page_size - 1) / page_size
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedStreamersResponse {
    pub streamers: Vec<StreamerResponse>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total_documents: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StreamerNameResponse {
    pub name: String,
}

/// List streamers, oldest first, in a paginated envelope.
#[utoipa::path(
    get,
    path = "/api/streamers",
    tag = "streamers",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of streamers", body = PaginatedStreamersResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db))]
pub async fn list_streamers(
    State(db): State<DbState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let page = query.page();
    let limit = query.limit();

    let (streamers, total_documents) = db.streamers.find_all(page, limit).await?;

    Ok(Json(PaginatedStreamersResponse {
        streamers: streamers.into_iter().map(Into::into).collect(),
        total_pages: total_pages(total_documents, limit),
        current_page: page,
        total_documents,
    }))
}

/// List every streamer's name, oldest first.
#[utoipa::path(
    get,
    path = "/api/streamers-names",
    tag = "streamers",
    responses(
        (status = 200, description = "All streamer names", body = Vec<StreamerNameResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(db))]
pub async fn list_streamer_names(
    State(db): State<DbState>,
) -> Result<impl IntoResponse, HttpAppError> {
    let names = db.streamers.list_names().await?;

    let response: Vec<StreamerNameResponse> = names
        .into_iter()
        .map(|name| StreamerNameResponse { name })
        .collect();

    Ok(Json(response))
}
