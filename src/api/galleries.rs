//! Gallery catalog API endpoints (admin surface).

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateGalleryRequest, Gallery, UpdateGalleryRequest};
use crate::AppState;

/// GET /api/galleries - List all galleries.
pub async fn list_galleries(State(state): State<AppState>) -> ApiResult<Vec<Gallery>> {
    let revision_id = state.repo.revision_id().await;
    success(state.repo.list_galleries().await, revision_id)
}

/// GET /api/galleries/:id - Get a single gallery.
pub async fn get_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Gallery> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.get_gallery(&id).await {
        Some(gallery) => success(gallery, revision_id),
        None => error(
            AppError::NotFound(format!("Gallery {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/galleries - Create a new passcode-protected gallery.
pub async fn create_gallery(
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryRequest>,
) -> ApiResult<Gallery> {
    let revision_id = state.repo.revision_id().await;

    // Validate required fields
    if request.passcode.trim().is_empty() {
        return error(
            AppError::Validation("Passcode is required".to_string()),
            revision_id,
        );
    }
    if request.photos.is_empty() {
        return error(
            AppError::Validation("At least one photo is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_gallery(&request).await {
        Ok(gallery) => {
            let new_revision = state.repo.revision_id().await;
            success(gallery, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/galleries/:id - Update a gallery's per-photo price.
pub async fn update_gallery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGalleryRequest>,
) -> ApiResult<Gallery> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.update_gallery_price(&id, request.price).await {
        Ok(gallery) => {
            let new_revision = state.repo.revision_id().await;
            success(gallery, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
