//! Metadata enrichment and organization.
//!
//! Enrichment attaches the creator's identity, tags, tier, and the sealed
//! flag to a freshly generated artifact. Organization relocates the
//! artifact into the media-type-scoped layout; output locations are
//! distinct per request because artifact ids are.

use atelier_types::{ArtifactMeta, ArtifactRef, Tier};

/// Attach creator identity, tags, tier, and the sealed flag.
pub fn enrich_metadata(
    artifact: &ArtifactRef,
    creator_id: &str,
    tags: &[String],
    tier: Tier,
    sealed: bool,
) -> ArtifactMeta {
    tracing::debug!(id = %artifact.id, creator_id, "metadata enriched");
    ArtifactMeta {
        creator_id: creator_id.to_string(),
        tags: tags.to_vec(),
        tier,
        sealed,
    }
}

/// Relocate an artifact into the media-type-scoped layout.
pub fn organize(artifact: ArtifactRef, media_root: &str) -> ArtifactRef {
    let location = format!("{media_root}/{}/{}", artifact.media_type, artifact.id);
    tracing::debug!(id = %artifact.id, location = %location, "artifact organized");
    ArtifactRef {
        location,
        ..artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::MediaType;

    fn generated_artifact(id: &str, media_type: MediaType) -> ArtifactRef {
        ArtifactRef {
            id: id.to_string(),
            media_type,
            location: format!("staging/{id}"),
        }
    }

    #[test]
    fn test_enrich_carries_request_context() {
        let artifact = generated_artifact("image-0000", MediaType::Image);
        let tags = vec!["landscape".to_string(), "dawn".to_string()];
        let meta = enrich_metadata(&artifact, "alice", &tags, Tier::Legacy, true);
        assert_eq!(meta.creator_id, "alice");
        assert_eq!(meta.tags, tags);
        assert_eq!(meta.tier, Tier::Legacy);
        assert!(meta.sealed);
    }

    #[test]
    fn test_organize_scopes_by_media_type() {
        let artifact = generated_artifact("music-0007", MediaType::Music);
        let organized = organize(artifact, "media");
        assert_eq!(organized.location, "media/music/music-0007");
        assert_eq!(organized.id, "music-0007");
    }

    #[test]
    fn test_organize_distinct_per_artifact() {
        let first = organize(generated_artifact("video-0001", MediaType::Video), "media");
        let second = organize(generated_artifact("video-0002", MediaType::Video), "media");
        assert_ne!(first.location, second.location);
    }
}
