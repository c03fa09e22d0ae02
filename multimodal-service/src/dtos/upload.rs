//! Multipart form shapes.
//!
//! `UploadForm` is what the handlers read off the stream. The other structs
//! only describe the routes in the OpenAPI document.

use crate::services::providers::MediaPart;
use utoipa::ToSchema;

/// Fields of an upload form. Empty prompts and zero-byte files are `None`.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub prompt: Option<String>,
    pub image: Option<MediaPart>,
    pub audio: Option<MediaPart>,
}

#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ImageUpload {
    /// Image file to analyse.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Instruction for the model. Defaults to a detailed description.
    pub prompt: Option<String>,
}

#[allow(dead_code)]
#[derive(ToSchema)]
pub struct AudioUpload {
    /// Audio file to analyse.
    #[schema(value_type = String, format = Binary)]
    pub audio: Vec<u8>,
    /// Instruction for the model. Defaults to transcription plus description.
    pub prompt: Option<String>,
}

/// Any combination of fields; at least one must be present.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct MultimodalUpload {
    pub prompt: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub audio: Option<Vec<u8>>,
}
