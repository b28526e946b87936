//! Subscriber tiers.
//!
//! A tier is a closed subscriber class controlling which capabilities and
//! ad behaviors apply to a user. Tiers are assigned at purchase time and
//! never change during a request. No ordering is defined between tiers for
//! capability purposes; capability sets are independent, non-nested.

use serde::{Deserialize, Serialize};

/// A subscriber tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Founder tier with exclusive access to media generation.
    Mythic,
    /// Founder tier below Mythic on the purchase path.
    Standard,
    /// Established creator tier.
    Legacy,
    /// Entry creator tier.
    Supporter,
    /// Base audience tier.
    General,
}

/// All known tiers, in purchase-path order (highest first).
pub const ALL_TIERS: [Tier; 5] = [
    Tier::Mythic,
    Tier::Standard,
    Tier::Legacy,
    Tier::Supporter,
    Tier::General,
];

impl Tier {
    /// Canonical lowercase name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Mythic => "mythic",
            Tier::Standard => "standard",
            Tier::Legacy => "legacy",
            Tier::Supporter => "supporter",
            Tier::General => "general",
        }
    }

    /// Parse a tier name, case-insensitively.
    ///
    /// Returns `None` for names outside the closed tier set. Callers that
    /// must stay total over arbitrary strings handle the `None` case
    /// themselves (the tier registry maps it to the empty capability set).
    pub fn parse(name: &str) -> Option<Tier> {
        match name.to_ascii_lowercase().as_str() {
            "mythic" => Some(Tier::Mythic),
            "standard" => Some(Tier::Standard),
            "legacy" => Some(Tier::Legacy),
            "supporter" => Some(Tier::Supporter),
            "general" => Some(Tier::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
