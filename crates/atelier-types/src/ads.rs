//! Advertisement types.

use serde::{Deserialize, Serialize};

/// The kind of an ad impression.
///
/// Platform ads are sold by the operator; creator ads are sold against a
/// specific creator's surface and share revenue with that creator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdType {
    Platform,
    Creator,
}

impl AdType {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::Platform => "platform",
            AdType::Creator => "creator",
        }
    }

    /// Parse an ad type name, case-insensitively. `None` for unknown names.
    pub fn parse(name: &str) -> Option<AdType> {
        match name.to_ascii_lowercase().as_str() {
            "platform" => Some(AdType::Platform),
            "creator" => Some(AdType::Creator),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
