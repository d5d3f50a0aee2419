//! PPR Server - Main entry point

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::get,
    Json, Router,
};
use ppr_common::logging::{init_logging, LogConfig};
use serde_json::json;
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

use ppr_server::{config::Config, features, middleware, store::ReportStore};

/// Static instruction block served at the root path
const INSTRUCTIONS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Paddy Power Report Mapper</title></head>
<body>
<h1>Paddy Power Report Mapper</h1>
<ol>
  <li>Export the previous month's data</li>
  <li>POST audits_basic_data_export.csv as the 'file' part to /api/v1/reports</li>
  <li>Follow the two download links in the response to fetch the GB and IE visit reports</li>
  <li>Standard bits - paste over new data</li>
  <li>Copy and paste over values etc. Done.</li>
</ol>
</body>
</html>
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    log_config.log_file_prefix = "ppr-server".to_string();
    if log_config.filter_directives.is_none() {
        log_config.filter_directives =
            Some("ppr_server=debug,tower_http=debug,axum=trace".to_string());
    }

    init_logging(&log_config)?;

    info!("Starting PPR Server");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    // The report store is the only state: generated bundles held for the
    // download step, bounded by capacity.
    let store = ReportStore::new(config.upload.store_capacity);

    // Build the application router
    let app = create_router(store, &config);

    // Create socket address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_router(store: ReportStore, config: &Config) -> Router {
    let feature_routes = features::router(features::FeatureState { store });

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api/v1", feature_routes)
        // Apply layers from innermost to outermost
        .layer(DefaultBodyLimit::max(config.upload.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Instructions page handler
async fn index() -> Html<&'static str> {
    Html(INSTRUCTIONS_HTML)
}

/// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy"
    }))
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    // Give ongoing requests time to complete
    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
