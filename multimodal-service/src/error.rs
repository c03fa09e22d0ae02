use crate::dtos::ErrorResponse;
use crate::services::ModelError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Request-level failures, each rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client did not supply what the route needs. Never reaches the model.
    #[error("{0}")]
    InvalidRequest(String),

    /// The framework refused the body (e.g. over the size limit). Keeps the
    /// framework's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The model call itself failed.
    #[error("{0}")]
    UpstreamFailure(#[from] ModelError),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::InvalidRequest(message) => {
                tracing::warn!(error = %message, "Rejected invalid request");
            }
            ApiError::Rejected { status, message } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Rejected request body");
            }
            ApiError::UpstreamFailure(_) => {}
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
