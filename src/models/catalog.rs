//! Catalog snapshot model.

use serde::{Deserialize, Serialize};

use super::Gallery;

/// A point-in-time snapshot of the whole gallery catalog (admin surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub revision_id: i64,
    pub generated_at: String,
    pub galleries: Vec<Gallery>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
