use multimodal_service::config::ServiceConfig;
use multimodal_service::handlers::meta::SERVICE_NAME;
use multimodal_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing(SERVICE_NAME, "info", otlp_endpoint.as_deref())?;

    // A missing or placeholder API key stops the process here, before any request
    let config = ServiceConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        e
    })?;

    tracing::info!(port = app.port(), "{} started", SERVICE_NAME);

    let result = app.run_until_stopped().await;
    if let Err(e) = &result {
        tracing::error!("HTTP server error: {}", e);
    }

    shutdown_tracing();
    result
}
