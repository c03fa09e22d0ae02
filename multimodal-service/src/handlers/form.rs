//! Reading `prompt` / `image` / `audio` off a multipart body.

use crate::dtos::UploadForm;
use crate::error::ApiError;
use crate::services::providers::MediaPart;
use crate::validation::non_empty;
use axum::extract::{
    multipart::{Field, MultipartError, MultipartRejection},
    Multipart,
};

pub const PROMPT_FIELD: &str = "prompt";
pub const IMAGE_FIELD: &str = "image";
pub const AUDIO_FIELD: &str = "audio";

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

/// Collect the known fields of an upload form. The first non-empty value of a
/// repeated field wins. A body that is not multipart at all yields an empty
/// form, so the route reports what is missing rather than why.
pub async fn read_upload_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadForm, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(%rejection, "Request body is not multipart");
            return Ok(UploadForm::default());
        }
    };

    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(PROMPT_FIELD) => {
                let text = field.text().await.map_err(multipart_error)?;
                if let Some(prompt) = non_empty(text) {
                    form.prompt.get_or_insert(prompt);
                }
            }
            Some(IMAGE_FIELD) => {
                if let Some(image) = read_media(field, DEFAULT_IMAGE_MIME).await? {
                    form.image.get_or_insert(image);
                }
            }
            Some(AUDIO_FIELD) => {
                if let Some(audio) = read_media(field, DEFAULT_AUDIO_MIME).await? {
                    form.audio.get_or_insert(audio);
                }
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

async fn read_media(field: Field<'_>, fallback: &'static str) -> Result<Option<MediaPart>, ApiError> {
    let mime_type = resolve_mime_type(field.content_type(), field.file_name(), fallback);
    let file_name = field.file_name().unwrap_or("unnamed").to_string();

    let data = field.bytes().await.map_err(multipart_error)?.to_vec();
    if data.is_empty() {
        return Ok(None);
    }

    tracing::debug!(
        file_name = %file_name,
        mime_type = %mime_type,
        size = data.len(),
        "Received upload"
    );

    Ok(Some(MediaPart { mime_type, data }))
}

/// Oversized bodies surface here as 413, malformed ones as 400.
fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::rejected(
        err.status(),
        format!("Failed to read multipart form: {}", err.body_text()),
    )
}

/// Prefer the part's declared type; otherwise guess from the file extension.
pub fn resolve_mime_type(
    content_type: Option<&str>,
    file_name: Option<&str>,
    fallback: &'static str,
) -> String {
    if let Some(content_type) = content_type {
        let content_type = content_type.trim();
        if !content_type.is_empty() && content_type != "application/octet-stream" {
            return content_type.to_string();
        }
    }

    let extension = file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let guessed = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aac") => "audio/aac",
        Some("m4a") => "audio/mp4",
        _ => fallback,
    };

    guessed.to_string()
}
