//! Member registry service - entry point.

use registry_server::api::{create_router, AppState};
use registry_server::config::Config;
use registry_store::Store;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting member registry service");

    // Initialize storage
    let store = if config.registry.persist {
        Store::file(config.registry.path.clone())
    } else {
        info!("Persistence disabled, using in-memory storage");
        Store::memory()
    };

    // Load the registry document; refuse to start over a document we
    // cannot read, since saving would silently overwrite it.
    let registry = match store.load().await {
        Ok(r) => {
            info!(
                pending = r.pending_count(),
                approved = r.approved_count(),
                "Member registry loaded"
            );
            r
        }
        Err(e) => {
            error!("Failed to load member registry: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(registry, store);
    let app = create_router(state, &config.static_assets.dir);

    // Bind to address
    let listen_addr = match config.server.listen_addr.parse() {
        Ok(ip) => ip,
        Err(e) => {
            error!(
                "Invalid listen address {:?}: {}",
                config.server.listen_addr, e
            );
            std::process::exit(1);
        }
    };
    let addr = SocketAddr::new(listen_addr, config.server.port);

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
