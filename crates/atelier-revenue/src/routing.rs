//! Ad revenue splits per impression.
//!
//! Platform ads pay out entirely to the platform operator. Creator ads are
//! split half-and-half between the operator and the creator the ad ran
//! against. When the amount is odd, the creator receives `amount / 2`
//! (floor) and the operator receives the remainder, so no cent is ever
//! lost or invented.

use atelier_types::AdType;
use serde::{Deserialize, Serialize};

use crate::{Result, RevenueError};

/// Default platform-operator payee identifier.
pub const DEFAULT_PLATFORM_PAYEE: &str = "jacob";

/// One payee's portion of a split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub payee: String,
    pub amount_cents: u64,
}

/// A revenue split across one or more payees.
///
/// Invariant: the shares sum to the input amount exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSplit {
    pub shares: Vec<Share>,
}

impl RevenueSplit {
    /// Sum of all shares in cents.
    pub fn total(&self) -> u64 {
        self.shares.iter().map(|share| share.amount_cents).sum()
    }

    /// The amount routed to a payee, if any.
    pub fn share_for(&self, payee: &str) -> Option<u64> {
        self.shares
            .iter()
            .find(|share| share.payee == payee)
            .map(|share| share.amount_cents)
    }
}

/// Route ad revenue for one impression, paying the default platform payee.
///
/// See [`route_ad_revenue_with`].
///
/// # Errors
///
/// - [`RevenueError::InvalidRouting`] if a creator ad has no creator id
pub fn route_ad_revenue(
    ad_type: AdType,
    amount_cents: u64,
    creator_id: Option<&str>,
) -> Result<RevenueSplit> {
    route_ad_revenue_with(DEFAULT_PLATFORM_PAYEE, ad_type, amount_cents, creator_id)
}

/// Route ad revenue for one impression to a configured platform payee.
///
/// - Platform ads: the entire amount goes to `platform_payee`.
/// - Creator ads with a non-empty creator id: half to the creator (floor),
///   remainder to `platform_payee`.
///
/// # Errors
///
/// - [`RevenueError::InvalidRouting`] if a creator ad has a missing or
///   empty creator id
pub fn route_ad_revenue_with(
    platform_payee: &str,
    ad_type: AdType,
    amount_cents: u64,
    creator_id: Option<&str>,
) -> Result<RevenueSplit> {
    let split = match ad_type {
        AdType::Platform => RevenueSplit {
            shares: vec![Share {
                payee: platform_payee.to_string(),
                amount_cents,
            }],
        },
        AdType::Creator => {
            let creator = match creator_id {
                Some(id) if !id.is_empty() => id,
                _ => {
                    return Err(RevenueError::InvalidRouting {
                        ad_type: ad_type.as_str().to_string(),
                        creator_id: creator_id.map(str::to_string),
                    })
                }
            };

            let creator_cents = amount_cents / 2;
            // Remainder to the platform payee, so odd amounts stay exact.
            let platform_cents = amount_cents - creator_cents;

            RevenueSplit {
                shares: vec![
                    Share {
                        payee: platform_payee.to_string(),
                        amount_cents: platform_cents,
                    },
                    Share {
                        payee: creator.to_string(),
                        amount_cents: creator_cents,
                    },
                ],
            }
        }
    };

    tracing::info!(
        ad_type = %ad_type,
        amount_cents,
        payees = split.shares.len(),
        "ad revenue routed"
    );

    Ok(split)
}

/// Route ad revenue from an untyped ad-type name.
///
/// # Errors
///
/// - [`RevenueError::InvalidRouting`] for unknown ad-type names, or a
///   creator ad with a missing or empty creator id
pub fn route_ad_revenue_named(
    ad_type: &str,
    amount_cents: u64,
    creator_id: Option<&str>,
) -> Result<RevenueSplit> {
    let parsed = AdType::parse(ad_type).ok_or_else(|| RevenueError::InvalidRouting {
        ad_type: ad_type.to_string(),
        creator_id: creator_id.map(str::to_string),
    })?;
    route_ad_revenue(parsed, amount_cents, creator_id)
}
