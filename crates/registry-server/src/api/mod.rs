//! HTTP API for the member registry.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use registry_store::{MemberRegistry, Store};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Mutations take the write lock, apply the change, and flush to the
/// store before releasing it, so read-modify-write cycles serialize
/// instead of racing on the document file.
#[derive(Clone)]
pub struct AppState {
    /// Member registry document
    pub registry: Arc<RwLock<MemberRegistry>>,
    /// Persistent storage backend
    pub store: Arc<Store>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: MemberRegistry, store: Store) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            store: Arc::new(store),
        }
    }
}

/// Create the API router. Static assets under `static_dir` are served
/// at the root path as the fallback for anything outside `/api`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/pendingMembers", get(handlers::list_pending))
        .route("/api/pendingMembers/:id", get(handlers::get_pending))
        .route("/api/members", post(handlers::submit_member))
        .route("/api/approve/:id", post(handlers::approve_member))
        .route("/api/approvedMembers", get(handlers::list_approved))
        .route("/api/approvedMembers/:id", get(handlers::get_approved))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
