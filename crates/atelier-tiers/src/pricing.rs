//! Entry prices and creator profit shares.
//!
//! Static per-tier commercial terms. Amounts are u64 cents. The profit
//! share is the percentage of a content sale paid out to the creator; the
//! platform retains the rest.

use atelier_types::{Tier, CENTS_PER_DOLLAR};
use serde::{Deserialize, Serialize};

/// Commercial terms for one tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPricing {
    /// One-time entry price in cents.
    pub entry_cents: u64,
    /// Recurring monthly fee in cents, if any.
    pub monthly_cents: Option<u64>,
    /// One-time unlock fee in cents, if any (Standard's CGI unlock).
    pub unlock_cents: Option<u64>,
}

/// Pricing for a tier.
pub fn pricing(tier: Tier) -> TierPricing {
    match tier {
        Tier::Mythic => TierPricing {
            entry_cents: 200 * CENTS_PER_DOLLAR,
            monthly_cents: None,
            unlock_cents: None,
        },
        Tier::Standard => TierPricing {
            entry_cents: 100 * CENTS_PER_DOLLAR,
            monthly_cents: None,
            unlock_cents: Some(100 * CENTS_PER_DOLLAR),
        },
        Tier::Legacy => TierPricing {
            entry_cents: 100 * CENTS_PER_DOLLAR,
            monthly_cents: None,
            unlock_cents: None,
        },
        Tier::Supporter => TierPricing {
            entry_cents: 50 * CENTS_PER_DOLLAR,
            monthly_cents: None,
            unlock_cents: None,
        },
        Tier::General => TierPricing {
            entry_cents: 15 * CENTS_PER_DOLLAR,
            monthly_cents: Some(5 * CENTS_PER_DOLLAR),
            unlock_cents: None,
        },
    }
}

/// Creator payout share on content sales, as a percentage.
pub fn profit_share_pct(tier: Tier) -> u8 {
    match tier {
        Tier::Mythic => 100,
        Tier::Standard => 100,
        Tier::Legacy => 95,
        Tier::Supporter => 85,
        Tier::General => 50,
    }
}
