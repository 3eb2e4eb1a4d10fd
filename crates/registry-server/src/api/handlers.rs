//! HTTP request handlers.

use super::types::HealthResponse;
use super::AppState;
use crate::error::ServiceError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use registry_store::{ApprovedMember, PendingMember, Submission};
use serde_json::Value;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        pending_members: registry.pending_count(),
        approved_members: registry.approved_count(),
    })
}

/// List all pending members.
pub async fn list_pending(State(state): State<AppState>) -> Json<Vec<PendingMember>> {
    let registry = state.registry.read().await;
    Json(registry.pending().to_vec())
}

/// Get a single pending member by id.
pub async fn get_pending(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PendingMember>, ServiceError> {
    let registry = state.registry.read().await;
    let member = registry.pending_by_id(id).ok_or(ServiceError::NotFound(id))?;
    Ok(Json(member.clone()))
}

/// Submit a new member registration.
pub async fn submit_member(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PendingMember>), ServiceError> {
    let submission = Submission::parse(body)?;

    // Stage the mutation on a copy and commit it only after the flush
    // succeeds; a failed save leaves the served state matching the
    // document on disk. The write lock is held across the save so
    // concurrent mutations cannot interleave.
    let mut registry = state.registry.write().await;
    let mut updated = registry.clone();
    let member = updated.submit(submission);

    state.store.save(&updated).await?;
    *registry = updated;

    info!(id = member.id, "Member submitted");
    Ok((StatusCode::CREATED, Json(member)))
}

/// Approve a pending member, moving it into the approved roster.
pub async fn approve_member(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApprovedMember>, ServiceError> {
    let mut registry = state.registry.write().await;
    let mut updated = registry.clone();

    let Some(approved) = updated.approve(id) else {
        warn!(id, "Approval requested for unknown pending member");
        return Err(ServiceError::NotFound(id));
    };

    state.store.save(&updated).await?;
    *registry = updated;

    info!(id, "Member approved");
    Ok(Json(approved))
}

/// List all approved members.
pub async fn list_approved(State(state): State<AppState>) -> Json<Vec<ApprovedMember>> {
    let registry = state.registry.read().await;
    Json(registry.approved().to_vec())
}

/// Get a single approved member by id.
pub async fn get_approved(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApprovedMember>, ServiceError> {
    let registry = state.registry.read().await;
    let member = registry.approved_by_id(id).ok_or(ServiceError::NotFound(id))?;
    Ok(Json(member.clone()))
}
