//! HTTP handlers for the multimodal service.

pub mod form;
pub mod generate;
pub mod meta;

pub use generate::{generate_audio, generate_image, generate_multimodal, generate_text};
pub use meta::{health_check, index};
