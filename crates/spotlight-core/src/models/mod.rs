//! Data models for the application
//!
//! Domain structures shared across the Spotlight crates: the streamer entity
//! itself plus the vote types that mutate it.

mod streamer;
mod vote;

pub use streamer::*;
pub use vote::*;
