//! The one place request handlers reach the model.

use super::providers::{ModelClient, Part};
use crate::dtos::GenerateResponse;
use crate::error::ApiError;
use std::time::Instant;

/// Forward validated parts to the model and wrap its text for the response.
///
/// Failures are not retried; the caller sees the upstream reason.
pub async fn invoke_model(
    model: &dyn ModelClient,
    route: &'static str,
    parts: Vec<Part>,
) -> Result<GenerateResponse, ApiError> {
    let kinds: Vec<&str> = parts.iter().map(Part::kind).collect();
    let start = Instant::now();

    match model.generate(&parts).await {
        Ok(text) => {
            tracing::info!(
                route,
                model = model.model_name(),
                parts = ?kinds,
                elapsed_ms = start.elapsed().as_millis() as u64,
                response_len = text.len(),
                "Model request completed"
            );
            Ok(GenerateResponse { text })
        }
        Err(e) => {
            tracing::error!(
                route,
                model = model.model_name(),
                parts = ?kinds,
                elapsed_ms = start.elapsed().as_millis() as u64,
                error = %e,
                "Model request failed"
            );
            Err(ApiError::UpstreamFailure(e))
        }
    }
}
