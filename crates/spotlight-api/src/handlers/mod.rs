//! HTTP request handlers.

pub mod streamer_create;
pub mod streamer_get;
pub mod streamer_list;
pub mod streamer_popular;
pub mod streamer_vote;

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::Serialize;
use spotlight_core::models::{Streamer, VoteCounts};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire shape of a streamer record. Image bytes go over the wire
/// base64-encoded; records without an image omit the field.
#[derive(Debug, Serialize, ToSchema)]
pub struct StreamerResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub platforms: Vec<String>,
    pub votes: VoteCounts,
    /// Base64-encoded JPEG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Streamer> for StreamerResponse {
    fn from(streamer: Streamer) -> Self {
        Self {
            id: streamer.id,
            name: streamer.name,
            description: streamer.description,
            platforms: streamer.platforms,
            votes: streamer.votes,
            image: streamer
                .image
                .map(|bytes| general_purpose::STANDARD.encode(bytes)),
            created_at: streamer.created_at,
            updated_at: streamer.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streamer_with_image(image: Option<Vec<u8>>) -> Streamer {
        let now = Utc::now();
        Streamer {
            id: Uuid::new_v4(),
            name: "Pokimane".to_string(),
            description: "Variety streams".to_string(),
            platforms: vec!["Twitch".to_string()],
            votes: VoteCounts { up: 3, down: 1 },
            image,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_image_bytes_are_base64_encoded() {
        let response = StreamerResponse::from(streamer_with_image(Some(vec![0xFF, 0xD8, 0xFF])));
        assert_eq!(response.image.as_deref(), Some("/9j/"));
    }

    #[test]
    fn test_missing_image_is_omitted_from_json() {
        let response = StreamerResponse::from(streamer_with_image(None));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["votes"]["up"], 3);
        assert_eq!(json["votes"]["down"], 1);
    }
}
