pub mod generate;
pub mod upload;

pub use generate::{ErrorResponse, GenerateResponse, TextRequest};
pub use upload::{AudioUpload, ImageUpload, MultimodalUpload, UploadForm};
