//! # atelier-revenue
//!
//! Monetization routing: ad revenue splits and creator sale payouts.
//! All amounts are u64 cents; every split conserves the input amount
//! exactly.
//!
//! ## Modules
//!
//! - [`routing`] — Ad revenue splits per impression
//! - [`payout`] — Creator sale payouts by tier profit share

pub mod payout;
pub mod routing;

/// Error types for revenue operations.
#[derive(Debug, thiserror::Error)]
pub enum RevenueError {
    /// The (ad type, creator id) combination cannot be routed.
    ///
    /// A caller programming error, not a user-facing condition: either the
    /// ad type is unknown or a creator ad arrived without a creator id.
    #[error("invalid routing: ad type {ad_type:?}, creator id {creator_id:?}")]
    InvalidRouting {
        /// The ad type as supplied by the caller.
        ad_type: String,
        /// The creator id as supplied by the caller.
        creator_id: Option<String>,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in revenue calculation")]
    Overflow,
}

/// Convenience result type for revenue operations.
pub type Result<T> = std::result::Result<T, RevenueError>;
