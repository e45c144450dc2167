//! Spotlight DB Library
//!
//! Database repositories for the Spotlight API.

pub mod db;

pub use db::{StreamerRepository, StreamerRow};
