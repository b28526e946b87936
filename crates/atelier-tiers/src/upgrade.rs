//! Purchase-path upgrade validation.
//!
//! Tiers are immutable once assigned; a user changes tier only by
//! purchasing an upgrade. A purchase may only move to a strictly higher
//! tier on the purchase path — downgrades and same-tier re-purchases are
//! rejected.
//!
//! The rank below orders purchases only. It says nothing about capability
//! sets, which remain independent and non-nested.

use atelier_types::Tier;

use crate::{Result, TierError};

/// Position of a tier on the purchase path (higher = more expensive).
pub fn purchase_rank(tier: Tier) -> u8 {
    match tier {
        Tier::General => 1,
        Tier::Supporter => 2,
        Tier::Legacy => 3,
        Tier::Standard => 4,
        Tier::Mythic => 5,
    }
}

/// Validate a proposed tier purchase.
///
/// Does not apply the upgrade — the engine never mutates a user's tier.
///
/// # Errors
///
/// - [`TierError::NotAnUpgrade`] if the target is not strictly higher on
///   the purchase path
pub fn validate_upgrade(current: Tier, target: Tier) -> Result<()> {
    if purchase_rank(target) <= purchase_rank(current) {
        return Err(TierError::NotAnUpgrade { current, target });
    }

    tracing::info!(from = %current, to = %target, "tier upgrade validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_to_higher_tier() {
        validate_upgrade(Tier::General, Tier::Supporter).expect("valid upgrade");
        validate_upgrade(Tier::General, Tier::Mythic).expect("valid upgrade");
        validate_upgrade(Tier::Standard, Tier::Mythic).expect("valid upgrade");
    }

    #[test]
    fn test_same_tier_rejected() {
        assert!(validate_upgrade(Tier::Legacy, Tier::Legacy).is_err());
    }

    #[test]
    fn test_downgrade_rejected() {
        assert!(validate_upgrade(Tier::Mythic, Tier::General).is_err());
        assert!(validate_upgrade(Tier::Standard, Tier::Legacy).is_err());
    }

    #[test]
    fn test_rank_is_strictly_increasing() {
        let ranks = [
            purchase_rank(Tier::General),
            purchase_rank(Tier::Supporter),
            purchase_rank(Tier::Legacy),
            purchase_rank(Tier::Standard),
            purchase_rank(Tier::Mythic),
        ];
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
