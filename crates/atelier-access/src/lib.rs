//! # atelier-access
//!
//! The access guard: the single authorization choke point for gated
//! operations. Every gated call site (generation, remix, slab execution)
//! routes through this crate rather than re-implementing tier comparisons
//! inline, so tier semantics stay consistent as rules evolve.
//!
//! Two modes are exposed:
//!
//! - [`guard`] — capability allowlist gate (Mythic-exclusive media generation)
//! - [`slab`] — exact-tier-equality gate for named privileged operations

pub mod guard;
pub mod slab;

/// Error types for access decisions.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The tier is not authorized for the capability.
    ///
    /// The only error in the workspace intended to be shown to the end
    /// user verbatim.
    #[error("permission denied for \"{capability}\": {reason}")]
    PermissionDenied {
        /// The capability that was requested.
        capability: String,
        /// Why the request was denied.
        reason: String,
    },

    /// No slab is registered under the given name.
    #[error("unknown slab: {0}")]
    UnknownSlab(String),
}

/// Convenience result type for access decisions.
pub type Result<T> = std::result::Result<T, AccessError>;
