use tracing::info;
use tracing_subscriber::EnvFilter;

use subway_server::config::ServerConfig;
use subway_server::network::Network;
use subway_server::path::PathFinder;
use subway_server::web::{AppState, create_router, shutdown_signal};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().expect("Failed to read configuration");

    // Fail fast on a broken network file
    let network = Network::load(&config.network_path).expect("Failed to load network");

    let state = AppState::new(network, PathFinder::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.addr, "subway route planner listening");
    info!("GET /health  /stations  /lines  /paths?source=&target=[&age=]");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
