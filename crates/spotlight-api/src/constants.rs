//! API constants
//!
//! All routes are mounted under a single unversioned prefix.

/// API base path prefix
pub const API_PREFIX: &str = "/api";
