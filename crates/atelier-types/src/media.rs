//! Media types and artifact references.

use serde::{Deserialize, Serialize};

use crate::{CreatorId, Tier};

/// A media type a creation request can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Music,
    Voice,
    Cgi,
}

impl MediaType {
    /// Canonical lowercase name. This is also the capability identifier
    /// passed to the access guard when a creation request is checked.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Music => "music",
            MediaType::Voice => "voice",
            MediaType::Cgi => "cgi",
        }
    }

    /// Parse a media type name, case-insensitively. `None` for unknown names.
    pub fn parse(name: &str) -> Option<MediaType> {
        match name.to_ascii_lowercase().as_str() {
            "image" => Some(MediaType::Image),
            "video" => Some(MediaType::Video),
            "music" => Some(MediaType::Music),
            "voice" => Some(MediaType::Voice),
            "cgi" => Some(MediaType::Cgi),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an artifact produced by the media engine.
///
/// The location changes as the artifact moves through the pipeline
/// (generated → organized → edited); the id is stable per request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Engine-assigned identifier, stable for the lifetime of the request.
    pub id: String,
    pub media_type: MediaType,
    /// Current location (path or handle) of the artifact.
    pub location: String,
}

/// Metadata attached to an artifact during enrichment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    pub creator_id: CreatorId,
    pub tags: Vec<String>,
    pub tier: Tier,
    /// Sealed artifacts are closed to further modification after export.
    pub sealed: bool,
}

/// The final exported artifact returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalArtifact {
    /// Output path of the exported artifact.
    pub path: String,
    /// Container format, e.g. `mp4`.
    pub format: String,
    pub watermarked: bool,
    pub sealed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_parse() {
        assert_eq!(MediaType::parse("video"), Some(MediaType::Video));
        assert_eq!(MediaType::parse("CGI"), Some(MediaType::Cgi));
        assert_eq!(MediaType::parse("hologram"), None);
    }

    #[test]
    fn test_media_type_roundtrip() {
        for media in [
            MediaType::Image,
            MediaType::Video,
            MediaType::Music,
            MediaType::Voice,
            MediaType::Cgi,
        ] {
            assert_eq!(MediaType::parse(media.as_str()), Some(media));
        }
    }

    #[test]
    fn test_artifact_ref_serde() {
        let artifact = ArtifactRef {
            id: "art-1".to_string(),
            media_type: MediaType::Cgi,
            location: "staging/art-1".to_string(),
        };
        let json = serde_json::to_string(&artifact).expect("serialize");
        let restored: ArtifactRef = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, artifact);
        assert!(json.contains("\"cgi\""));
    }
}
