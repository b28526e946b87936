//! The stage machine.
//!
//! A creation request moves through a linear sequence of stages with no
//! branching back:
//!
//! `Start → AccessChecked → Generated → MetadataEnriched → Organized →
//! [Edited] → Exported → Done`
//!
//! The editing stage runs only for video requests. The terminal failure
//! state `Rejected` is reachable from `Start` only: an access denial
//! aborts before any collaborator call, so no partial side effects exist.
//! Downstream failures propagate unmodified — no retries, no rollback of
//! completed stages.
//!
//! Multiple requests may run concurrently without coordination: nothing
//! shared is written before the final artifact path, and output paths are
//! distinct per request.

use atelier_access::guard::check_access;
use atelier_types::{ArtifactMeta, CreationRequest, FinalArtifact, MediaType};
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEvent, AuditSink};
use crate::config::StudioConfig;
use crate::editor::EditingSuite;
use crate::engine::MediaEngine;
use crate::metadata::{enrich_metadata, organize};
use crate::Result;

/// A stage of the creation pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    AccessChecked,
    Generated,
    MetadataEnriched,
    Organized,
    Edited,
    Exported,
    Done,
    Rejected,
}

/// The result of a successful creation request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreationReceipt {
    /// The exported artifact.
    pub artifact: FinalArtifact,
    /// Metadata attached during enrichment.
    pub meta: ArtifactMeta,
    /// The stages traversed, in order.
    pub stages: Vec<Stage>,
}

/// Run one creation request through the pipeline.
///
/// The media type doubles as the capability identifier for the access
/// check, so Mythic-exclusive media (CGI) is rejected here before the
/// engine is ever invoked. The engine re-validates on its side as well.
///
/// # Errors
///
/// - [`crate::StudioError::Access`] if the access guard denies the
///   request; nothing else has happened at that point
/// - [`crate::StudioError::Generation`] if the media engine fails
/// - [`crate::StudioError::Export`] if editing or export fails
pub async fn run_creation<E, S, A>(
    request: &CreationRequest,
    engine: &E,
    suite: &S,
    audit: &A,
    config: &StudioConfig,
) -> Result<CreationReceipt>
where
    E: MediaEngine,
    S: EditingSuite,
    A: AuditSink,
{
    let mut stages = vec![Stage::Start];

    let authorized = check_access(request.user_tier, request.media_type.as_str())?;
    stages.push(Stage::AccessChecked);
    tracing::info!(
        tier = %authorized.tier,
        capability = %authorized.capability,
        creator_id = %request.creator_id,
        "creation request authorized"
    );

    let artifact = engine
        .generate(&request.prompt, request.media_type, request.user_tier)
        .await?;
    stages.push(Stage::Generated);

    let meta = enrich_metadata(
        &artifact,
        &request.creator_id,
        &request.tags,
        request.user_tier,
        config.export.seal,
    );
    stages.push(Stage::MetadataEnriched);

    let mut artifact = organize(artifact, &config.media.root);
    stages.push(Stage::Organized);

    if request.media_type == MediaType::Video {
        artifact = suite
            .edit(
                artifact,
                request.audio_path.as_deref(),
                request.text_overlay.as_deref(),
            )
            .await?;
        stages.push(Stage::Edited);
    }

    let watermark = config
        .export
        .watermark
        .then_some(config.export.watermark_text.as_str());
    let artifact = suite
        .export(artifact, &config.export.format, watermark, config.export.seal)
        .await?;
    stages.push(Stage::Exported);

    audit.record(AuditEvent::creation(&request.creator_id, &artifact));
    stages.push(Stage::Done);

    tracing::info!(
        creator_id = %request.creator_id,
        path = %artifact.path,
        "creation request complete"
    );

    Ok(CreationReceipt {
        artifact,
        meta,
        stages,
    })
}
