//! Application startup and lifecycle management.

use crate::config::ServiceConfig;
use crate::docs::ApiDoc;
use crate::handlers;
use crate::services::providers::gemini::{GeminiClient, GeminiConfig};
use crate::services::ModelClient;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    http_trace_layer, request_id_middleware, security_headers_middleware,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelClient>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self {
            model,
            max_body_bytes: service_core::config::Config::default().max_body_bytes,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/spec", ApiDoc::openapi()))
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/text", post(handlers::generate_text))
        .route("/image", post(handlers::generate_image))
        .route("/audio", post(handlers::generate_audio))
        .route("/multimodal", post(handlers::generate_multimodal))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the Gemini client described by `config`.
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let gemini = GeminiClient::new(GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            api_base: config.gemini.api_base.clone(),
            timeout: config.gemini.timeout,
        })
        .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %config.gemini.model,
            timeout_secs = config.gemini.timeout.as_secs(),
            "Initialized Gemini client"
        );

        Self::build_with_model(config, Arc::new(gemini)).await
    }

    /// Build the application around an already constructed model client.
    pub async fn build_with_model(
        config: ServiceConfig,
        model: Arc<dyn ModelClient>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(model).with_max_body_bytes(config.common.max_body_bytes);
        let app = build_router(state);

        // Port 0 picks a random port, which the tests rely on
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
