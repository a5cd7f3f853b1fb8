//! # rentalhubd — rentalhub daemon
//!
//! Composition root that wires the adapters together and starts the
//! server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env overrides)
//! - Construct the JSON dataset repository (adapter)
//! - Construct the unit service, injecting the repository via the port
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until interrupted
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use rentalhub_adapter_http_axum::state::AppState;
use rentalhub_adapter_storage_json::JsonUnitRepository;
use rentalhub_app::services::unit_service::UnitService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let repo = JsonUnitRepository::new(config.data_path());
    let unit_service = UnitService::new(repo);

    let state = AppState::new(unit_service);
    let app = rentalhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, data = config.data_path(), "rentalhubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown handler");
    }
}
