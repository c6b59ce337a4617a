//! Access gate API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::models::{AccessGranted, AccessRequest, Gallery};
use crate::AppState;

/// POST /api/access - Open a gallery with a client passcode.
///
/// Success creates a session with the matched gallery active. Failure is
/// the single designed user-facing error of the demo: invalid passcode.
pub async fn open_gallery(
    State(state): State<AppState>,
    Json(request): Json<AccessRequest>,
) -> ApiResult<AccessGranted> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.open_gallery(&request.passcode).await {
        Ok((session, gallery)) => {
            let new_revision = state.repo.revision_id().await;
            success(AccessGranted { session, gallery }, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/sessions/:id/gallery - The session's active gallery, so
/// clients can return to their gallery via a saved link.
pub async fn get_session_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Gallery> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.session_gallery(&id).await {
        Ok(gallery) => success(gallery, revision_id),
        Err(e) => error(e, revision_id),
    }
}
