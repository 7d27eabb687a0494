//! upto server - GuidePace estimates and trail search for the web client.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upto_server::api;
use upto_server::config::Config;
use upto_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("upto_server=debug".parse()?);
    if config.log_json {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .init();
    }

    tracing::info!("Starting upto server ({})...", config.environment);

    let port = config.server_port;
    let cors = api::cors_layer(&config);
    tracing::info!("CORS enabled for: {}", config.cors_origins.join(", "));
    let state = Arc::new(AppState::new(config));

    let app = api::routes().with_state(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
