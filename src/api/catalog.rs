//! Catalog snapshot API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{CatalogSnapshot, RevisionInfo};
use crate::AppState;

/// GET /api/catalog - Get the full catalog snapshot.
pub async fn get_catalog(State(state): State<AppState>) -> ApiResult<CatalogSnapshot> {
    let snapshot = state.repo.catalog_snapshot().await;
    let revision_id = snapshot.revision_id;
    success(snapshot, revision_id)
}

/// GET /api/catalog/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state.repo.revision_info().await;
    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}
