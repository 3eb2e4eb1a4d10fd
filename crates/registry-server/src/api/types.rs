//! API response types.
//!
//! Member endpoints return the `registry-store` records directly so
//! submitted fields round-trip verbatim; only the health check has a
//! response shape of its own.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub pending_members: usize,
    pub approved_members: usize,
}
