//! multimodal-service: HTTP gateway forwarding text, image and audio prompts
//! to a hosted generative model.
pub mod config;
pub mod docs;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;
pub mod startup;
pub mod validation;
