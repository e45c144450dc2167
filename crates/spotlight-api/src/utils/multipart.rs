//! Multipart form decoding for streamer creation.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use bytes::Bytes;
use spotlight_core::AppError;

/// An uploaded image part: the declared MIME type plus the raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub content_type: String,
    pub data: Bytes,
}

/// Decoded form for `POST /streamer`. `platforms` is empty when the field was
/// absent; `image` is `None` when no file part was sent.
#[derive(Debug, Clone)]
pub struct CreateStreamerForm {
    pub name: String,
    pub description: String,
    pub platforms: Vec<String>,
    pub image: Option<UploadedImage>,
}

impl CreateStreamerForm {
    /// Extract the creation form from a multipart body. Each known field may
    /// appear at most once; unknown fields are skipped.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut name: Option<String> = None;
        let mut description: Option<String> = None;
        let mut platforms: Option<Vec<String>> = None;
        let mut image: Option<UploadedImage> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
        {
            let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

            match field_name.as_str() {
                "name" => {
                    reject_duplicate(name.is_some(), "name")?;
                    name = Some(read_text(field, "name").await?);
                }
                "description" => {
                    reject_duplicate(description.is_some(), "description")?;
                    description = Some(read_text(field, "description").await?);
                }
                "platforms" => {
                    reject_duplicate(platforms.is_some(), "platforms")?;
                    let raw = read_text(field, "platforms").await?;
                    platforms = Some(parse_platforms(&raw)?);
                }
                "image" => {
                    reject_duplicate(image.is_some(), "image")?;
                    let content_type = field
                        .content_type()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "application/octet-stream".to_string());

                    let data = field.bytes().await.map_err(|e| {
                        AppError::InvalidInput(format!("Failed to read file data: {}", e))
                    })?;

                    image = Some(UploadedImage { content_type, data });
                }
                _ => {}
            }
        }

        Ok(Self {
            name: require_text(name, "name")?,
            description: require_text(description, "description")?,
            platforms: platforms.unwrap_or_default(),
            image,
        })
    }
}

fn reject_duplicate(already_seen: bool, field: &str) -> Result<(), AppError> {
    if already_seen {
        return Err(AppError::InvalidInput(format!(
            "Duplicate field '{}'; each form field may appear only once",
            field
        )));
    }
    Ok(())
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read field '{}': {}", name, e)))
}

/// Required text fields must be present and non-blank.
fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::InvalidInput(format!(
            "Missing required field '{}'",
            field
        ))),
    }
}

/// The `platforms` field carries a JSON array of strings (e.g.
/// `["Twitch","YouTube"]`). Anything else is rejected.
fn parse_platforms(raw: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|_| {
        AppError::InvalidInput("Invalid platforms: expected a JSON array of strings".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_platforms_accepts_array_of_strings() {
        assert_eq!(
            parse_platforms(r#"["Twitch","YouTube"]"#).unwrap(),
            vec!["Twitch".to_string(), "YouTube".to_string()]
        );
        assert_eq!(parse_platforms("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn parse_platforms_rejects_everything_else() {
        assert!(parse_platforms("Twitch").is_err());
        assert!(parse_platforms(r#""Twitch""#).is_err());
        assert!(parse_platforms(r#"{"platform":"Twitch"}"#).is_err());
        assert!(parse_platforms(r#"["Twitch", 1]"#).is_err());
        assert!(parse_platforms("").is_err());
    }

    #[test]
    fn require_text_rejects_missing_and_blank() {
        assert!(require_text(None, "name").is_err());
        assert!(require_text(Some("   ".to_string()), "name").is_err());
        assert_eq!(
            require_text(Some("John Doe".to_string()), "name").unwrap(),
            "John Doe"
        );
    }
}
