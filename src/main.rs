use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use urlpulse::api;
use urlpulse::config::MonitorConfig;
use urlpulse::engine::Monitor;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into()))
        .with_ansi(true)
        .init();

    let config_path = "config.json";
    let config_content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path))?;
    let config: MonitorConfig = serde_json::from_str(&config_content)
        .with_context(|| "Failed to parse config")?;

    let monitor = Arc::new(Monitor::new(&config).context("Failed to set up monitor")?);
    let view = monitor.view();
    let api_port = config.api_port;

    tokio::spawn(async move {
        api::start_server(api_port, view).await;
    });

    let monitor_clone = Arc::clone(&monitor);
    tokio::spawn(async move {
        if let Err(e) = monitor_clone.run().await {
            tracing::error!("Monitor engine failed: {}", e);
        }
    });

    signal::ctrl_c().await?;
    info!("Shutdown signal received. Closing URL monitor...");

    Ok(())
}
