//! Gallery and photo models matching the frontend gallery shape.

use serde::{Deserialize, Serialize};

/// Fallback price per photo (USD) when a created gallery supplies none.
pub const DEFAULT_PRICE_PER_PHOTO: f64 = 25.0;

/// A single photo inside a gallery. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique within the owning gallery.
    pub id: String,
    /// Full-resolution image reference.
    pub url: String,
    /// Preview/thumbnail reference (watermarked client-side).
    pub thumb: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A passcode-gated collection of photos with one per-photo price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    /// Uppercase slug derived from the label, e.g. `HUSKIES-0907`.
    pub id: String,
    pub label: String,
    /// Shared secret granting access to this gallery. Plaintext is the
    /// documented demo contract; it must never leave the process, so it
    /// is skipped on serialization.
    #[serde(skip_serializing, default)]
    pub passcode: String,
    /// Price per photo in USD. Non-negative.
    pub price: f64,
    pub photos: Vec<Photo>,
    pub cover_url: String,
    pub created_at: String,
}

impl Gallery {
    /// Find a photo by id within this gallery.
    pub fn photo(&self, photo_id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == photo_id)
    }
}

/// A photo supplied to gallery creation. The upload pipeline is out of
/// scope, so callers hand over already-hosted references.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub url: String,
    #[serde(default)]
    pub thumb: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for creating a new gallery (admin, demo-only).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryRequest {
    pub label: String,
    pub passcode: String,
    #[serde(default)]
    pub photos: Vec<NewPhoto>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Request body for updating a gallery's per-photo price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryRequest {
    pub price: f64,
}

/// Derive a gallery identifier from its label: upper-case, every run of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed. An empty result means the label is unusable.
pub fn gallery_id_from_label(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    for ch in label.trim().to_uppercase().chars() {
        if ch.is_ascii_alphanumeric() {
            id.push(ch);
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_matches('-').to_string()
}
