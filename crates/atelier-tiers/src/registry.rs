//! Tier → capability mapping.
//!
//! The registry is static data: each tier unlocks a fixed set of named
//! capabilities. Capability names are opaque identifiers — the engine never
//! interprets them, only tests membership. The sets are independent and
//! non-nested (Standard's unlocks are disjoint from Legacy's).
//!
//! Lookups are total: an unknown tier name yields the empty set, never an
//! error. Membership tests are ASCII-case-insensitive because capability
//! identifiers arrive both display-cased ("CGI") and lowercase ("cgi").

use atelier_types::Tier;

/// Capabilities unlocked by the Mythic tier.
pub const MYTHIC_UNLOCKS: &[&str] = &[
    "AI Generation",
    "CGI",
    "Unlimited Export",
    "Remix Protocol",
    "Graveyard Monetization",
    "Governance Override",
];

/// Capabilities unlocked by the Standard tier.
pub const STANDARD_UNLOCKS: &[&str] = &["Video Editor", "Podcast Fusion", "Folderizer"];

/// Capabilities unlocked by the Legacy tier.
pub const LEGACY_UNLOCKS: &[&str] = &["Prompt-to-Image", "Export Engine", "Profile Ad Bubble"];

/// Capabilities unlocked by the Supporter tier.
pub const SUPPORTER_UNLOCKS: &[&str] = &["Folderizer", "Voice Synthesis", "Meme Generator"];

/// Capabilities unlocked by the General tier.
pub const GENERAL_UNLOCKS: &[&str] = &["Profile Ad Bubble", "Clickbait Enforcement"];

/// The capabilities a tier unlocks.
///
/// Pure and total over the closed tier set.
pub fn unlocks_for(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Mythic => MYTHIC_UNLOCKS,
        Tier::Standard => STANDARD_UNLOCKS,
        Tier::Legacy => LEGACY_UNLOCKS,
        Tier::Supporter => SUPPORTER_UNLOCKS,
        Tier::General => GENERAL_UNLOCKS,
    }
}

/// The capabilities unlocked by a tier name.
///
/// Tolerant variant of [`unlocks_for`]: names outside the known five tiers
/// yield the empty set, never an error.
pub fn unlocks_for_name(name: &str) -> &'static [&'static str] {
    match Tier::parse(name) {
        Some(tier) => unlocks_for(tier),
        None => &[],
    }
}

/// Whether a tier unlocks the given capability (case-insensitive).
pub fn unlocks(tier: Tier, capability: &str) -> bool {
    unlocks_for(tier)
        .iter()
        .any(|entry| entry.eq_ignore_ascii_case(capability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_types::tier::ALL_TIERS;

    #[test]
    fn test_every_tier_has_unlocks() {
        for tier in ALL_TIERS {
            assert!(
                !unlocks_for(tier).is_empty(),
                "{tier} should unlock at least one capability"
            );
        }
    }

    #[test]
    fn test_reference_table() {
        assert_eq!(
            unlocks_for(Tier::Mythic),
            &[
                "AI Generation",
                "CGI",
                "Unlimited Export",
                "Remix Protocol",
                "Graveyard Monetization",
                "Governance Override",
            ]
        );
        assert_eq!(
            unlocks_for(Tier::Standard),
            &["Video Editor", "Podcast Fusion", "Folderizer"]
        );
        assert_eq!(
            unlocks_for(Tier::Legacy),
            &["Prompt-to-Image", "Export Engine", "Profile Ad Bubble"]
        );
        assert_eq!(
            unlocks_for(Tier::Supporter),
            &["Folderizer", "Voice Synthesis", "Meme Generator"]
        );
        assert_eq!(
            unlocks_for(Tier::General),
            &["Profile Ad Bubble", "Clickbait Enforcement"]
        );
    }

    #[test]
    fn test_standard_and_legacy_disjoint() {
        for capability in unlocks_for(Tier::Standard) {
            assert!(!unlocks(Tier::Legacy, capability));
        }
    }

    #[test]
    fn test_unknown_tier_name_yields_empty_set() {
        assert!(unlocks_for_name("founder").is_empty());
        assert!(unlocks_for_name("").is_empty());
    }

    #[test]
    fn test_name_lookup_case_insensitive() {
        assert_eq!(unlocks_for_name("MYTHIC"), MYTHIC_UNLOCKS);
        assert_eq!(unlocks_for_name("Legacy"), LEGACY_UNLOCKS);
    }

    #[test]
    fn test_membership_case_insensitive() {
        assert!(unlocks(Tier::Mythic, "cgi"));
        assert!(unlocks(Tier::Mythic, "CGI"));
        assert!(unlocks(Tier::Supporter, "folderizer"));
        assert!(!unlocks(Tier::General, "CGI"));
    }
}
