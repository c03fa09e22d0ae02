//! Per-route input checks.
//!
//! Each function turns a parsed request into the parts sent to the model, or
//! the route's fixed `InvalidRequest` message. Nothing here touches the model.

use crate::dtos::{TextRequest, UploadForm};
use crate::error::ApiError;
use crate::services::Part;

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const IMAGE_REQUIRED: &str = "Image file is required";
pub const AUDIO_REQUIRED: &str = "Audio file is required";
pub const MODALITY_REQUIRED: &str =
    "At least one modality (text, image, or audio) must be provided";

pub const DEFAULT_IMAGE_PROMPT: &str = "Describe this image in detail.";
pub const DEFAULT_AUDIO_PROMPT: &str = "Transcribe and describe this audio.";

/// Trimmed text, or `None` when nothing is left.
pub fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

/// `/text`: a non-blank prompt. `None` means the body could not be parsed.
pub fn validate_text(request: Option<TextRequest>) -> Result<Vec<Part>, ApiError> {
    let prompt = request
        .and_then(|request| request.prompt)
        .and_then(non_empty)
        .ok_or_else(|| ApiError::invalid(PROMPT_REQUIRED))?;

    Ok(vec![Part::Text(prompt)])
}

/// `/image`: an image file, plus the prompt or a default one.
pub fn validate_image(form: UploadForm) -> Result<Vec<Part>, ApiError> {
    let image = form.image.ok_or_else(|| ApiError::invalid(IMAGE_REQUIRED))?;
    let prompt = form
        .prompt
        .unwrap_or_else(|| DEFAULT_IMAGE_PROMPT.to_string());

    Ok(vec![Part::Media(image), Part::Text(prompt)])
}

/// `/audio`: an audio file, plus the prompt or a default one.
pub fn validate_audio(form: UploadForm) -> Result<Vec<Part>, ApiError> {
    let audio = form.audio.ok_or_else(|| ApiError::invalid(AUDIO_REQUIRED))?;
    let prompt = form
        .prompt
        .unwrap_or_else(|| DEFAULT_AUDIO_PROMPT.to_string());

    Ok(vec![Part::Media(audio), Part::Text(prompt)])
}

/// `/multimodal`: whatever was supplied, media first, at least one part.
pub fn validate_multimodal(form: UploadForm) -> Result<Vec<Part>, ApiError> {
    let parts: Vec<Part> = [
        form.image.map(Part::Media),
        form.audio.map(Part::Media),
        form.prompt.map(Part::Text),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        return Err(ApiError::invalid(MODALITY_REQUIRED));
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MediaPart;

    fn png() -> MediaPart {
        MediaPart {
            mime_type: "image/png".to_string(),
            data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn wav() -> MediaPart {
        MediaPart {
            mime_type: "audio/wav".to_string(),
            data: b"RIFF".to_vec(),
        }
    }

    fn message(err: ApiError) -> String {
        match err {
            ApiError::InvalidRequest(message) => message,
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_empty("   \n".to_string()), None);
        assert_eq!(non_empty("".to_string()), None);
        assert_eq!(non_empty(" hi ".to_string()), Some("hi".to_string()));
        assert_eq!(non_empty("hi".to_string()), Some("hi".to_string()));
    }

    #[test]
    fn text_requires_prompt() {
        assert_eq!(message(validate_text(None).unwrap_err()), PROMPT_REQUIRED);
        assert_eq!(
            message(validate_text(Some(TextRequest::default())).unwrap_err()),
            PROMPT_REQUIRED
        );
        assert_eq!(
            message(
                validate_text(Some(TextRequest {
                    prompt: Some("  ".to_string())
                }))
                .unwrap_err()
            ),
            PROMPT_REQUIRED
        );
    }

    #[test]
    fn text_forwards_prompt() {
        let parts = validate_text(Some(TextRequest {
            prompt: Some("hello".to_string()),
        }))
        .unwrap();

        assert_eq!(parts, vec![Part::text("hello")]);
    }

    #[test]
    fn image_requires_file_even_with_prompt() {
        let form = UploadForm {
            prompt: Some("Describe".to_string()),
            ..Default::default()
        };
        assert_eq!(message(validate_image(form).unwrap_err()), IMAGE_REQUIRED);
    }

    #[test]
    fn image_without_prompt_uses_default() {
        let form = UploadForm {
            image: Some(png()),
            ..Default::default()
        };

        assert_eq!(
            validate_image(form).unwrap(),
            vec![Part::Media(png()), Part::text(DEFAULT_IMAGE_PROMPT)]
        );
    }

    #[test]
    fn audio_requires_file() {
        let form = UploadForm {
            prompt: Some("Describe this audio".to_string()),
            image: Some(png()),
            ..Default::default()
        };
        assert_eq!(message(validate_audio(form).unwrap_err()), AUDIO_REQUIRED);
    }

    #[test]
    fn audio_keeps_caller_prompt() {
        let form = UploadForm {
            prompt: Some("Transcribe only".to_string()),
            audio: Some(wav()),
            ..Default::default()
        };

        assert_eq!(
            validate_audio(form).unwrap(),
            vec![Part::Media(wav()), Part::text("Transcribe only")]
        );
    }

    #[test]
    fn multimodal_requires_any_modality() {
        assert_eq!(
            message(validate_multimodal(UploadForm::default()).unwrap_err()),
            MODALITY_REQUIRED
        );
    }

    #[test]
    fn multimodal_orders_media_before_prompt() {
        let form = UploadForm {
            prompt: Some("Compare".to_string()),
            image: Some(png()),
            audio: Some(wav()),
        };

        assert_eq!(
            validate_multimodal(form).unwrap(),
            vec![Part::Media(png()), Part::Media(wav()), Part::text("Compare")]
        );
    }

    #[test]
    fn multimodal_accepts_single_modality() {
        let form = UploadForm {
            audio: Some(wav()),
            ..Default::default()
        };
        assert_eq!(validate_multimodal(form).unwrap(), vec![Part::Media(wav())]);
    }
}
