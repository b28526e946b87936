//! # atelier-studio
//!
//! The creation orchestrator: sequences a single "create artifact" request
//! through access check, generation, metadata enrichment, organization,
//! optional editing, and export.
//!
//! Media synthesis and editing are external collaborators behind trait
//! seams; in-process stubs implement the contracts for tests and demos.
//! Audit persistence is likewise a collaborator — the core reports events,
//! the sink decides what to do with them.
//!
//! ## Modules
//!
//! - [`config`] — Studio configuration (TOML)
//! - [`engine`] — Media engine collaborator contract + stub
//! - [`editor`] — Editing/export collaborator contract + stub
//! - [`metadata`] — Metadata enrichment and organization
//! - [`audit`] — Audit sink collaborator contract
//! - [`pipeline`] — The stage machine

pub mod audit;
pub mod config;
pub mod editor;
pub mod engine;
pub mod metadata;
pub mod pipeline;

use crate::editor::SuiteError;
use crate::engine::EngineError;

/// Error taxonomy for one creation request.
///
/// Only [`StudioError::Access`] is intended to be shown to the end user
/// verbatim; the collaborator variants are opaque to the core, always
/// fatal for the request, and should be logged by the caller and surfaced
/// as a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// The access guard rejected the request. No side effects occurred.
    #[error(transparent)]
    Access(#[from] atelier_access::AccessError),

    /// The media engine failed or rejected the request.
    #[error("generation failed: {0}")]
    Generation(#[from] EngineError),

    /// The editing/export collaborator failed.
    #[error("export failed: {0}")]
    Export(#[from] SuiteError),
}

/// Convenience result type for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;
