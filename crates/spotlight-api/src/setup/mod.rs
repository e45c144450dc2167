//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use spotlight_core::Config;
use spotlight_db::StreamerRepository;
use spotlight_processing::FfmpegTranscoder;

use crate::services::image::ImageService;
use crate::state::{AppState, DbState};

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Image pipeline: ffmpeg transcoder behind the trait, validator sized from config
    let transcoder = FfmpegTranscoder::new(config.ffmpeg_path.clone())
        .context("Failed to initialize ffmpeg transcoder")?;
    let images = ImageService::new(config.max_image_size_bytes, Arc::new(transcoder));

    let state = Arc::new(AppState {
        db: DbState {
            pool: pool.clone(),
            streamers: StreamerRepository::new(pool),
        },
        images,
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
