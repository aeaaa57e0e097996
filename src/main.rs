use anyhow::Context;
use tracing::{info, Level};

mod models;
mod routes;
mod state;
mod utils;

use crate::state::app_state::AppState;
use crate::utils::conf_helper::init_config_and_bind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // === CONFIG + LISTENER ===
    let (config, listener) = init_config_and_bind()
        .await
        .context("critical init failure")?;

    info!(
        "Server initialized on {}:{}",
        config.connection.ip, config.connection.port
    );
    if let Some(seed) = config.seed {
        info!("Using shared generator seeded with {}", seed);
    }

    let app = routes::app(AppState::new(config));

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
