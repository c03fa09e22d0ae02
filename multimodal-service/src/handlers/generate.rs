use super::form::read_upload_form;
use crate::dtos::{GenerateResponse, TextRequest};
use crate::error::ApiError;
use crate::services::invoke_model;
use crate::startup::AppState;
use crate::validation;
use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};

/// Generate text from a text prompt
#[utoipa::path(
    post,
    path = "/text",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Model response", body = GenerateResponse),
        (status = 400, description = "Prompt is required", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate_text(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => Some(request),
        Err(
            rejection @ (JsonRejection::MissingJsonContentType(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)),
        ) => {
            tracing::debug!(%rejection, "Unreadable /text body");
            None
        }
        // Body could not be buffered at all, e.g. over the size limit
        Err(rejection) => {
            return Err(ApiError::rejected(rejection.status(), rejection.body_text()));
        }
    };

    let parts = validation::validate_text(request)?;
    let response = invoke_model(state.model.as_ref(), "text", parts).await?;
    Ok(Json(response))
}

/// Analyse an uploaded image
#[utoipa::path(
    post,
    path = "/image",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Model response", body = GenerateResponse),
        (status = 400, description = "Image file is required", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let form = read_upload_form(multipart).await?;
    let parts = validation::validate_image(form)?;
    let response = invoke_model(state.model.as_ref(), "image", parts).await?;
    Ok(Json(response))
}

/// Analyse an uploaded audio clip
#[utoipa::path(
    post,
    path = "/audio",
    request_body(content = AudioUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Model response", body = GenerateResponse),
        (status = 400, description = "Audio file is required", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let form = read_upload_form(multipart).await?;
    let parts = validation::validate_audio(form)?;
    let response = invoke_model(state.model.as_ref(), "audio", parts).await?;
    Ok(Json(response))
}

/// Combine any of prompt, image and audio in one request
#[utoipa::path(
    post,
    path = "/multimodal",
    request_body(content = MultimodalUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Model response", body = GenerateResponse),
        (status = 400, description = "No modality provided", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "Generation"
)]
pub async fn generate_multimodal(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let form = read_upload_form(multipart).await?;
    let parts = validation::validate_multimodal(form)?;
    let response = invoke_model(state.model.as_ref(), "multimodal", parts).await?;
    Ok(Json(response))
}
