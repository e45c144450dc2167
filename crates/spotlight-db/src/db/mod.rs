//! Database repositories for the data access layer
//!
//! Each repository owns the queries for one domain entity; handlers never
//! touch SQL directly.

pub mod streamers;

pub use streamers::{StreamerRepository, StreamerRow};
