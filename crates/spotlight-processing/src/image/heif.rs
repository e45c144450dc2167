//! HEIC/HEIF to JPEG transcoding via the ffmpeg CLI.

use std::process::Stdio;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;

use crate::image::ImageError;

/// Converts HEIC/HEIF payloads to JPEG.
///
/// The production implementation shells out to ffmpeg; tests substitute
/// their own implementations.
#[async_trait]
pub trait HeifTranscoder: Send + Sync {
    async fn to_jpeg(&self, data: &[u8]) -> Result<Bytes, ImageError>;
}

/// Transcoder backed by an ffmpeg binary on the host.
pub struct FfmpegTranscoder {
    ffmpeg_path: String,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: String) -> Result<Self> {
        // Validate ffmpeg_path
        let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
        if ffmpeg_path.chars().any(|c| dangerous_chars.contains(&c)) {
            return Err(anyhow!(
                "Invalid ffmpeg_path: contains dangerous characters"
            ));
        }

        Ok(Self { ffmpeg_path })
    }
}

#[async_trait]
impl HeifTranscoder for FfmpegTranscoder {
    async fn to_jpeg(&self, data: &[u8]) -> Result<Bytes, ImageError> {
        // Write input to temp file
        let input_temp = tempfile::Builder::new().suffix(".heic").tempfile()?;
        tokio::fs::write(input_temp.path(), data).await?;

        // Output needs a .jpg suffix so ffmpeg picks the JPEG muxer.
        let output_temp = tempfile::Builder::new().suffix(".jpg").tempfile()?;
        let output_path = output_temp.path();

        let args = vec![
            "-i".to_string(),
            input_temp.path().to_string_lossy().to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-q:v".to_string(),
            "2".to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ];

        let output = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ImageError::Transcode(format!(
                "ffmpeg exited with {}: {}",
                output.status, stderr
            )));
        }

        let jpeg = tokio::fs::read(output_path).await?;
        if jpeg.is_empty() {
            return Err(ImageError::Transcode(
                "ffmpeg produced no output".to_string(),
            ));
        }

        tracing::debug!(
            input_bytes = data.len(),
            output_bytes = jpeg.len(),
            "Transcoded HEIC to JPEG"
        );

        Ok(Bytes::from(jpeg))
    }
}
