use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let app = api::app(&config);

    info!(
        first_id = config.registers.first_id,
        "Starting TaskList API with graceful shutdown ({}s timeout)",
        config.server.shutdown_timeout.as_secs()
    );

    create_production_app(app, &config.server, async {
        info!("Shutting down: in-memory task list is discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("TaskList API shutdown complete");
    Ok(())
}
