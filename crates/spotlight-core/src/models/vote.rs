use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which counter a vote applies to. Decoding is strict: anything other than
/// `"up"` or `"down"` on the wire is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

impl VoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteKind::Up => "up",
            VoteKind::Down => "down",
        }
    }
}

/// Up/down counters for a streamer. Both start at zero and only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteCounts {
    pub up: i64,
    pub down: i64,
}
