//! HTTP server for the Timeclock Engine.
//!
//! Environment:
//! - `TIMECLOCK_CONFIG` configuration directory (default `./config/timeclock`)
//! - `TIMECLOCK_ADDR` listen address (default `127.0.0.1:3000`)
//! - `TIMECLOCK_LOG` tracing filter (default `info`)

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timeclock_engine::api::{create_router, AppState};
use timeclock_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/timeclock";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_tracing(filter: EnvFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env("TIMECLOCK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    init_tracing(filter)?;

    let config_dir =
        std::env::var("TIMECLOCK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("TIMECLOCK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {config_dir}"))?;
    let router = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "Timeclock server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
