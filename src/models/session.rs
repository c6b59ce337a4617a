//! Client session models.

use serde::{Deserialize, Serialize};

use super::Gallery;

/// A client session opened by a successful passcode match. The matched
/// gallery stays active for the lifetime of the session and scopes all
/// cart operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub gallery_id: String,
    pub created_at: String,
}

/// Request body for the access gate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub passcode: String,
}

/// Response of a successful access: the new session plus its gallery
/// (passcode omitted by the gallery's serialization).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGranted {
    pub session: Session,
    pub gallery: Gallery,
}
