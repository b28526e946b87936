//! Capability allowlist gate.
//!
//! A fixed set of capabilities is Mythic-exclusive regardless of what the
//! tier registry says: the allowlist is a hard gate layered on top of the
//! registry, not merely informational. A tier could list "AI Generation"
//! in its unlock set and still be rejected here if it is not Mythic.
//!
//! Non-allowlisted capabilities are approved without consulting the
//! registry's unlock sets. That matches the platform's observed behavior;
//! whether it is intended is an open product question (see DESIGN.md).

use atelier_types::Tier;
use serde::Serialize;

use crate::{AccessError, Result};

/// Capabilities requiring exactly the Mythic tier.
pub const MEDIA_GENERATION_ALLOWLIST: &[&str] = &["AI Generation", "CGI", "Unlimited Export"];

/// Proof that a (tier, capability) pair passed the guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Authorized {
    pub tier: Tier,
    pub capability: String,
}

/// Whether a capability is on the Mythic-exclusive allowlist.
///
/// Matching is ASCII-case-insensitive: capability identifiers arrive both
/// display-cased ("CGI") and as lowercase media-type names ("cgi").
pub fn is_mythic_exclusive(capability: &str) -> bool {
    MEDIA_GENERATION_ALLOWLIST
        .iter()
        .any(|entry| entry.eq_ignore_ascii_case(capability))
}

/// Check whether a tier is authorized for a capability.
///
/// Evaluated in order:
///
/// 1. Allowlisted capability and tier is not Mythic → denied. This check
///    is independent of, and takes precedence over, the registry lookup.
/// 2. Otherwise authorized.
///
/// # Errors
///
/// - [`AccessError::PermissionDenied`] with reason "Mythic-exclusive"
pub fn check_access(tier: Tier, capability: &str) -> Result<Authorized> {
    if is_mythic_exclusive(capability) && tier != Tier::Mythic {
        tracing::info!(%tier, capability, "access denied");
        return Err(AccessError::PermissionDenied {
            capability: capability.to_string(),
            reason: "Mythic-exclusive".to_string(),
        });
    }

    Ok(Authorized {
        tier,
        capability: capability.to_string(),
    })
}
