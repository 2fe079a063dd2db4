#![cfg(feature = "server")]

use std::sync::Arc;

use activity_board::config::Config;
use activity_board::model::Activity;
use activity_board::server::telemetry::{init_telemetry, shutdown_telemetry};
use activity_board::server::{create_activity_route, MemoryStorage};
use tracing::{error, info};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_telemetry(&config)?;

    let storage = match &config.activities_file {
        Some(path) => MemoryStorage::<Activity>::from_json_file(path)?,
        None => MemoryStorage::new(),
    };
    info!(activity_count = storage.len()?, "Activity storage ready");

    let app = create_activity_route(Arc::new(storage));
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, "Listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    shutdown_telemetry(&config);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
