//! # atelier-tiers
//!
//! The tier registry: the static mapping from subscriber tier to unlocked
//! capabilities, plus tier pricing and the purchase-path upgrade rules.
//!
//! ## Modules
//!
//! - [`registry`] — Tier → capability mapping
//! - [`pricing`] — Entry prices and creator profit shares
//! - [`upgrade`] — Purchase-path upgrade validation

pub mod pricing;
pub mod registry;
pub mod upgrade;

use atelier_types::Tier;

/// Error types for tier operations.
#[derive(Debug, thiserror::Error)]
pub enum TierError {
    /// A purchase must move to a strictly higher tier.
    #[error("cannot move from {current} to {target}: not an upgrade")]
    NotAnUpgrade {
        /// The tier currently held.
        current: Tier,
        /// The tier requested.
        target: Tier,
    },
}

/// Convenience result type for tier operations.
pub type Result<T> = std::result::Result<T, TierError>;
