use thiserror::Error;

/// Infrastructure failures raised while starting or running a service.
///
/// Request-level failures belong to each service's own error type; this
/// enum only covers what can go wrong around them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_source_message() {
        let err = AppError::ConfigError(anyhow::anyhow!("GEMINI_API_KEY is required but not set"));
        assert_eq!(
            err.to_string(),
            "Configuration error: GEMINI_API_KEY is required but not set"
        );
    }

    #[test]
    fn io_errors_become_internal_errors() {
        let err = AppError::from(std::io::Error::other("address in use"));
        assert!(matches!(err, AppError::InternalError(_)));

        let io: std::io::Error = err.into();
        assert!(io.to_string().contains("address in use"));
    }
}
