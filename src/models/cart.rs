//! Cart item and cart view models.

use serde::{Deserialize, Serialize};

/// A selected photo pending (mock) checkout.
///
/// The price is intentionally not stored here: totals are resolved against
/// the owning gallery's current price at read time, so price changes
/// retroactively affect unchecked-out carts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Derived identifier, `{galleryId}_{photoId}`. Unique within a cart.
    pub id: String,
    pub gallery_id: String,
    pub gallery_label: String,
    pub title: String,
    pub thumb: String,
}

impl CartItem {
    /// The deterministic cart item id for a photo in a gallery.
    pub fn derive_id(gallery_id: &str, photo_id: &str) -> String {
        format!("{}_{}", gallery_id, photo_id)
    }
}

/// Request body for adding a photo to a session's cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub photo_id: String,
}

/// A cart as presented to the client: items in insertion order plus the
/// total computed from current gallery prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: f64,
}

/// Result of the mock checkout: the order that *would* have been placed.
/// A production build replaces this with a payment-provider session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub placed_at: String,
}
