//! Cart and mock checkout API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{AddCartItemRequest, CartItem, CartView, OrderSummary};
use crate::AppState;

/// GET /api/sessions/:id/cart - The session's cart with its total.
pub async fn get_cart(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<CartView> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.cart_view(&id).await {
        Ok(cart) => success(cart, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/sessions/:id/cart/items - Add a photo from the session's
/// active gallery to the cart. A duplicate add is rejected.
pub async fn add_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddCartItemRequest>,
) -> ApiResult<CartItem> {
    let revision_id = state.repo.revision_id().await;

    if request.photo_id.trim().is_empty() {
        return error(
            AppError::Validation("Photo ID is required".to_string()),
            revision_id,
        );
    }

    match state.repo.add_cart_item(&id, &request.photo_id).await {
        Ok(item) => {
            let new_revision = state.repo.revision_id().await;
            success(item, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/sessions/:id/cart/items/:item_id - Remove a cart item.
/// Removing an absent id is an idempotent no-op.
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<CartView> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.remove_cart_item(&id, &item_id).await {
        Ok(cart) => {
            let new_revision = state.repo.revision_id().await;
            success(cart, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/sessions/:id/checkout - Mock checkout: empties the cart and
/// returns the order that would have been placed.
pub async fn checkout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<OrderSummary> {
    let revision_id = state.repo.revision_id().await;

    match state.repo.checkout(&id).await {
        Ok(order) => {
            let new_revision = state.repo.revision_id().await;
            success(order, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
