//! Application state and sub-state extractors.
//!
//! AppState is built once at startup, shared behind an `Arc`, and dropped at
//! shutdown. Sub-states can be extracted via Axum's `FromRef` so handlers
//! only name what they need.

use std::sync::Arc;

use spotlight_core::Config;
use spotlight_db::StreamerRepository;
use sqlx::PgPool;

use crate::services::image::ImageService;

/// Database pool and repositories.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub streamers: StreamerRepository,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub images: ImageService,
    pub config: Config,
}

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for ImageService {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.images.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
