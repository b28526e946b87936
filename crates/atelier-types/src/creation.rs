//! Creation request.

use serde::{Deserialize, Serialize};

use crate::{CreatorId, MediaType, Tier};

/// A single "create artifact" request.
///
/// Transient: exists only for the duration of one orchestration call and is
/// never persisted by the core. The user's tier is trusted input — identity
/// authentication happens upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreationRequest {
    pub prompt: String,
    pub media_type: MediaType,
    pub creator_id: CreatorId,
    pub user_tier: Tier,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Audio overlay source, applied only to video requests.
    #[serde(default)]
    pub audio_path: Option<String>,
    /// Text overlay, applied only to video requests.
    #[serde(default)]
    pub text_overlay: Option<String>,
}
