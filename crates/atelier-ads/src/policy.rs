//! The visibility decision table.
//!
//! Pure and stateless; safe to call once per impression render. Ad serving
//! is independent of the creation pipeline and of the access guard — paid
//! tiers buy an ad-free experience regardless of what the ad is.

use atelier_types::{AdType, Tier};

/// Whether an ad of the given type is shown to a viewer of the given tier.
///
/// Decision table, first match wins:
///
/// 1. Mythic and Standard never see ads, regardless of ad type.
/// 2. Creator ads are shown to Legacy and Supporter.
/// 3. Platform ads are shown to General.
/// 4. Everything else: no ad.
pub fn should_display_ad(tier: Tier, ad_type: AdType) -> bool {
    let visible = match (tier, ad_type) {
        (Tier::Mythic | Tier::Standard, _) => false,
        (Tier::Legacy | Tier::Supporter, AdType::Creator) => true,
        (Tier::General, AdType::Platform) => true,
        _ => false,
    };

    tracing::debug!(%tier, ad_type = %ad_type, display = visible, "ad visibility decided");
    visible
}
