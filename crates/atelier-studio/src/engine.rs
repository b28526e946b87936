//! Media engine collaborator contract.
//!
//! The engine performs the actual media synthesis and may be long-running.
//! It is required to independently re-validate Mythic exclusivity for CGI
//! synthesis: both the access guard and the engine must agree before a
//! gated artifact exists.

use std::sync::atomic::{AtomicU64, Ordering};

use atelier_types::{ArtifactRef, MediaType, Tier};

/// Error reported by a media engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine refused the request on its own authority.
    #[error("engine rejected request: {0}")]
    Rejected(String),

    /// Synthesis failed.
    #[error("engine failure: {0}")]
    Failure(String),
}

/// Media engine contract.
///
/// Implementors provide the actual synthesis. This abstraction allows the
/// pipeline to be exercised without a real engine.
pub trait MediaEngine {
    /// Synthesize an artifact for the prompt.
    fn generate(
        &self,
        prompt: &str,
        media_type: MediaType,
        tier: Tier,
    ) -> impl std::future::Future<Output = std::result::Result<ArtifactRef, EngineError>> + Send;
}

/// In-process placeholder engine.
///
/// Produces empty artifacts with deterministic ids. Real synthesis is out
/// of scope; this stub exists so the pipeline and its callers can run
/// end-to-end in tests and demos.
#[derive(Debug, Default)]
pub struct StubEngine {
    counter: AtomicU64,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaEngine for StubEngine {
    fn generate(
        &self,
        prompt: &str,
        media_type: MediaType,
        tier: Tier,
    ) -> impl std::future::Future<Output = std::result::Result<ArtifactRef, EngineError>> + Send
    {
        async move {
            // Engine-side re-validation: CGI synthesis is Mythic-exclusive
            // even if the caller's gate let the request through.
            if media_type == MediaType::Cgi && tier != Tier::Mythic {
                return Err(EngineError::Rejected(format!(
                    "cgi synthesis is Mythic-exclusive, got {tier}"
                )));
            }

            let sequence = self.counter.fetch_add(1, Ordering::Relaxed);
            let id = format!("{media_type}-{sequence:04}");

            tracing::info!(%media_type, %tier, prompt, id = %id, "artifact synthesized");

            Ok(ArtifactRef {
                location: format!("staging/{id}"),
                id,
                media_type,
            })
        }
    }
}
