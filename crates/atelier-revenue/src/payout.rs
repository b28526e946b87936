//! Creator sale payouts by tier profit share.
//!
//! Content-sale proceeds are split between the creator and the platform
//! according to the creator's tier profit share. The creator receives
//! `amount * pct / 100` (floor); the platform receives the remainder.

use atelier_tiers::pricing::profit_share_pct;
use atelier_types::Tier;

use crate::{Result, RevenueError};

/// Split a content-sale amount between creator and platform.
///
/// Returns `(creator_cents, platform_cents)`.
///
/// # Errors
///
/// - [`RevenueError::Overflow`] if `amount_cents * pct` overflows
pub fn creator_sale_payout(tier: Tier, amount_cents: u64) -> Result<(u64, u64)> {
    let pct = u64::from(profit_share_pct(tier));

    let creator_cents = amount_cents
        .checked_mul(pct)
        .ok_or(RevenueError::Overflow)?
        / 100;
    let platform_cents = amount_cents - creator_cents;

    tracing::info!(
        %tier,
        amount_cents,
        creator_cents,
        platform_cents,
        "sale payout computed"
    );

    Ok((creator_cents, platform_cents))
}
