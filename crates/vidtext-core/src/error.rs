use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidtextError {
    #[error("Invalid YouTube URL: {url}. Could not extract a video id")]
    InvalidUrl { url: String },

    #[error("Metadata lookup failed for {url}: {reason}")]
    MetadataFailed { url: String, reason: String },

    #[error("Transcript {path} contains no text")]
    TranscriptEmpty { path: PathBuf },

    #[error("Invalid configuration: {reason}")]
    ConfigInvalid { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, VidtextError>;
