//! Domain route groups.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn streamer_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/streamer", API_PREFIX),
            post(handlers::streamer_create::create_streamer),
        )
        .route(
            &format!("{}/streamer", API_PREFIX),
            get(handlers::streamer_get::get_streamer),
        )
        .route(
            &format!("{}/streamer/{{id}}", API_PREFIX),
            put(handlers::streamer_vote::vote_streamer),
        )
        .route(
            &format!("{}/streamers", API_PREFIX),
            get(handlers::streamer_list::list_streamers),
        )
        .route(
            &format!("{}/streamers-names", API_PREFIX),
            get(handlers::streamer_list::list_streamer_names),
        )
        .route(
            &format!("{}/streamers/popular", API_PREFIX),
            get(handlers::streamer_popular::popular_streamers),
        )
        .with_state(state)
}
