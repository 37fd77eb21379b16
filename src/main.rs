//! Instance Metadata API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use instance_metadata_api::application::use_cases::instance::GetInstanceSummaryUseCase;
use instance_metadata_api::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use instance_metadata_api::infrastructure::driven_adapters::metadata_client::AzureMetadataClient;
use instance_metadata_api::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so it can pick the log format
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "instance_metadata_api=debug,tower_http=debug".into());
    match config.log.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
    tracing::info!("Configuration loaded successfully");

    // Create metadata client
    let metadata_source = Arc::new(AzureMetadataClient::new(&config.metadata)?);
    tracing::info!(endpoint = %config.metadata.endpoint, "Metadata client created");

    // Create use cases
    let get_instance_summary_use_case = Arc::new(GetInstanceSummaryUseCase::new(metadata_source));

    // Create application state
    let app_state = AppState {
        get_instance_summary_use_case,
    };

    // Build router
    let app = api_rest::app(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
