//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use spotlight_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spotlight API",
        version = "0.1.0",
        description = "Streamer spotlight API: register streamers with profile images, vote them up or down, and browse rankings. All endpoints live under /api."
    ),
    paths(
        handlers::streamer_create::create_streamer,
        handlers::streamer_get::get_streamer,
        handlers::streamer_list::list_streamers,
        handlers::streamer_list::list_streamer_names,
        handlers::streamer_popular::popular_streamers,
        handlers::streamer_vote::vote_streamer,
    ),
    components(
        schemas(
            // Streamer models
            handlers::StreamerResponse,
            handlers::streamer_create::CreateStreamerResponse,
            handlers::streamer_list::PaginatedStreamersResponse,
            handlers::streamer_list::StreamerNameResponse,
            // Vote models
            handlers::streamer_vote::VotePayload,
            models::VoteKind,
            models::VoteCounts,
            // Query params
            handlers::streamer_list::PaginationQuery,
            handlers::streamer_get::FindStreamerQuery,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "streamers", description = "Streamer registration, lookup, ranking, and voting operations")
    )
)]
pub struct ApiDoc;
