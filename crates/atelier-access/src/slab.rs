//! Exact-tier-equality gate for named privileged operations.
//!
//! Slabs are named governance/administrative actions (campaign posts,
//! crew signals) that run under a strict tier requirement: the caller's
//! tier must equal the required tier exactly. This is distinct from the
//! media allowlist in [`crate::guard`], which gates capabilities.

use atelier_types::Tier;

use crate::{AccessError, Result};

/// Default required tier for slab execution.
pub const DEFAULT_SLAB_TIER: Tier = Tier::Mythic;

/// Registered slabs: name → description.
const SLABS: &[(&str, &str)] = &[
    ("access-post", "announce a new member's platform access"),
    ("founding-creator-post", "announce a founding creator"),
    ("influencer-post", "announce an influencer partnership"),
    ("tech-crew-signal", "signal the technical crew channel"),
];

/// Look up a slab's description by name.
pub fn slab_description(name: &str) -> Option<&'static str> {
    SLABS
        .iter()
        .find(|(slab, _)| *slab == name)
        .map(|(_, description)| *description)
}

/// Validate that a named slab may execute under the given tier.
///
/// Enforces exact tier equality, not allowlist membership. Returns the
/// slab's description on success.
///
/// # Errors
///
/// - [`AccessError::UnknownSlab`] if no slab is registered under `name`
/// - [`AccessError::PermissionDenied`] if `tier` is not exactly `required`
pub fn validate_slab_execution(name: &str, tier: Tier, required: Tier) -> Result<&'static str> {
    let description =
        slab_description(name).ok_or_else(|| AccessError::UnknownSlab(name.to_string()))?;

    if tier != required {
        tracing::info!(slab = name, %tier, %required, "slab execution denied");
        return Err(AccessError::PermissionDenied {
            capability: name.to_string(),
            reason: format!("requires exactly the {required} tier"),
        });
    }

    Ok(description)
}
