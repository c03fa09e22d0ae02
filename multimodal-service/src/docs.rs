use crate::dtos;
use crate::handlers;
use utoipa::OpenApi;

pub const API_TITLE: &str = "Multimodal Gemini API";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Multimodal Gemini API",
        version = "1.0.0",
        description = "Send text, image and audio prompts to Gemini and get text back"
    ),
    paths(
        handlers::meta::index,
        handlers::meta::health_check,
        handlers::generate::generate_text,
        handlers::generate::generate_image,
        handlers::generate::generate_audio,
        handlers::generate::generate_multimodal,
    ),
    components(
        schemas(
            dtos::TextRequest,
            dtos::GenerateResponse,
            dtos::ErrorResponse,
            dtos::ImageUpload,
            dtos::AudioUpload,
            dtos::MultimodalUpload,
        )
    ),
    tags(
        (name = "Generation", description = "Prompt the model with one or more modalities"),
        (name = "Metadata", description = "Service description and health"),
    )
)]
pub struct ApiDoc;
