//! Generative model abstractions and implementations.
//!
//! Handlers only ever see `dyn ModelClient`, so the Gemini backend can be
//! swapped for the in-process mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for model invocations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Model client not configured: {0}")]
    NotConfigured(String),

    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by Gemini API")]
    RateLimited,

    #[error("Request to Gemini API timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Content blocked by Gemini: {0}")]
    ContentBlocked(String),

    #[error("Gemini API returned no text")]
    EmptyResponse,

    #[error("Failed to parse Gemini response: {0}")]
    InvalidResponse(String),
}

/// One piece of content sent to the model, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Media(MediaPart),
}

/// Binary payload (image or audio) with its MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaPart {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for MediaPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPart")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    pub fn media(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Part::Media(MediaPart {
            mime_type: mime_type.into(),
            data,
        })
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &str {
        match self {
            Part::Text(_) => "text",
            Part::Media(media) => media
                .mime_type
                .split('/')
                .next()
                .unwrap_or("media"),
        }
    }
}

/// Client for a hosted generative model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send the parts as a single user turn and return the generated text.
    async fn generate(&self, parts: &[Part]) -> Result<String, ModelError>;

    /// Model identifier, for logs and health output.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_kind_uses_top_level_mime_type() {
        assert_eq!(Part::text("hi").kind(), "text");
        assert_eq!(Part::media("image/png", vec![1]).kind(), "image");
        assert_eq!(Part::media("audio/wav", vec![1]).kind(), "audio");
    }

    #[test]
    fn media_debug_omits_payload() {
        let part = Part::media("image/png", vec![0u8; 4096]);
        let debug = format!("{:?}", part);
        assert!(debug.contains("len: 4096"));
        assert!(!debug.contains("0, 0, 0"));
    }
}
