//! Gemini model client.
//!
//! Calls the `generateContent` REST method with text and inline media parts.

use super::{ModelClient, ModelError, Part};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the API key, kept out of the URL so it never hits access logs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ModelError::NotConfigured(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, parts: &[Part]) -> Result<String, ModelError> {
        let request = GenerateContentRequest::from_parts(parts);

        tracing::debug!(
            model = %self.config.model,
            part_count = parts.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ModelError::Timeout
            } else {
                ModelError::InvalidResponse(e.to_string())
            }
        })?;

        body.into_text()
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

fn transport_error(err: reqwest::Error) -> ModelError {
    if err.is_timeout() {
        ModelError::Timeout
    } else {
        ModelError::Network(err.to_string())
    }
}

/// Pull `error.message` out of a Gemini error envelope, falling back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.is_empty() => "empty response body".to_string(),
        Err(_) => body.to_string(),
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_parts(parts: &[Part]) -> Self {
        let parts = parts
            .iter()
            .map(|part| match part {
                Part::Text(text) => RequestPart::Text { text: text.clone() },
                Part::Media(media) => RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: media.mime_type.clone(),
                        data: STANDARD.encode(&media.data),
                    },
                },
            })
            .collect();

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate.
    fn into_text(self) -> Result<String, ModelError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ModelError::ContentBlocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyResponse)?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(ModelError::ContentBlocked("SAFETY".to_string()));
        }

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            Err(ModelError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_encodes_text_and_inline_media() {
        let request = GenerateContentRequest::from_parts(&[
            Part::media("image/png", vec![1, 2, 3]),
            Part::text("Describe this image"),
        ]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "AQID" } },
                        { "text": "Describe this image" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] }, "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));

        assert_eq!(response.into_text().unwrap(), "Hello, world");
    }

    #[test]
    fn safety_finish_reason_is_blocked() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        }));

        assert_eq!(
            response.into_text(),
            Err(ModelError::ContentBlocked("SAFETY".to_string()))
        );
    }

    #[test]
    fn prompt_feedback_block_wins_over_candidates() {
        let response = parse(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "PROHIBITED_CONTENT" }
        }));

        assert_eq!(
            response.into_text(),
            Err(ModelError::ContentBlocked("PROHIBITED_CONTENT".to_string()))
        );
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        assert_eq!(parse(json!({})).into_text(), Err(ModelError::EmptyResponse));
    }

    #[test]
    fn error_message_prefers_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message("upstream exploded"), "upstream exploded");
        assert_eq!(error_message(""), "empty response body");
    }
}
