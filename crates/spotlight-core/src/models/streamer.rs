use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vote::VoteCounts;

/// A content creator profile with vote counters and an optional profile image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streamer {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Ordered list of streaming platforms; order is preserved as submitted.
    pub platforms: Vec<String>,
    pub votes: VoteCounts,
    /// Normalized JPEG bytes (fits within 600x800). Set once at creation,
    /// immutable afterwards.
    pub image: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for a new streamer. Identity, vote defaults, and timestamps
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewStreamer {
    pub name: String,
    pub description: String,
    pub platforms: Vec<String>,
    pub image: Option<Vec<u8>>,
}
