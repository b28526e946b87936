//! Editing/export collaborator contract.
//!
//! One collaborator covers both editing (overlays on video) and the final
//! export (container format, watermark, seal). Its failures are opaque to
//! the core and fatal for the request.

use atelier_types::{ArtifactRef, FinalArtifact};

/// Error reported by the editing/export collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// Overlay application failed.
    #[error("edit failed: {0}")]
    Edit(String),

    /// Final export failed.
    #[error("export failed: {0}")]
    Export(String),
}

/// Editing/export collaborator contract.
pub trait EditingSuite {
    /// Apply the supplied overlays to a video artifact.
    ///
    /// Overlays that are `None` are simply not applied.
    fn edit(
        &self,
        artifact: ArtifactRef,
        audio_path: Option<&str>,
        text_overlay: Option<&str>,
    ) -> impl std::future::Future<Output = std::result::Result<ArtifactRef, SuiteError>> + Send;

    /// Produce the final artifact in the given container format.
    ///
    /// `watermark` carries the watermark text when one is applied.
    fn export(
        &self,
        artifact: ArtifactRef,
        format: &str,
        watermark: Option<&str>,
        seal: bool,
    ) -> impl std::future::Future<Output = std::result::Result<FinalArtifact, SuiteError>> + Send;
}

/// In-process placeholder suite.
///
/// Rewrites locations instead of touching media; exists so the pipeline
/// can run end-to-end in tests and demos.
#[derive(Debug, Default)]
pub struct StubSuite;

impl StubSuite {
    pub fn new() -> Self {
        Self
    }
}

impl EditingSuite for StubSuite {
    fn edit(
        &self,
        artifact: ArtifactRef,
        audio_path: Option<&str>,
        text_overlay: Option<&str>,
    ) -> impl std::future::Future<Output = std::result::Result<ArtifactRef, SuiteError>> + Send
    {
        async move {
            tracing::info!(
                id = %artifact.id,
                audio = audio_path.is_some(),
                text = text_overlay.is_some(),
                "overlays applied"
            );
            Ok(ArtifactRef {
                location: format!("{}+edited", artifact.location),
                ..artifact
            })
        }
    }

    fn export(
        &self,
        artifact: ArtifactRef,
        format: &str,
        watermark: Option<&str>,
        seal: bool,
    ) -> impl std::future::Future<Output = std::result::Result<FinalArtifact, SuiteError>> + Send
    {
        async move {
            tracing::info!(id = %artifact.id, format, seal, "artifact exported");
            Ok(FinalArtifact {
                path: format!("{}.{format}", artifact.location),
                format: format.to_string(),
                watermarked: watermark.is_some(),
                sealed: seal,
            })
        }
    }
}
