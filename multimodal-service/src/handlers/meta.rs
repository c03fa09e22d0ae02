use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "multimodal-service";

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description", body = String, content_type = "text/plain")
    ),
    tag = "Metadata"
)]
pub async fn index() -> &'static str {
    "Multimodal Gemini API\n\n\
     POST /text        JSON {\"prompt\"}\n\
     POST /image       multipart: image, optional prompt\n\
     POST /audio       multipart: audio, optional prompt\n\
     POST /multimodal  multipart: any of prompt, image, audio\n\n\
     OpenAPI document at /spec, interactive docs at /docs\n"
}

/// Liveness probe. Does not call the model.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "Metadata"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.model.model_name(),
    }))
}
