//! Audit sink collaborator contract.
//!
//! Persistence of audit records (paths, JSON shapes, retention) belongs
//! entirely to the sink; the core only reports events. Recording is
//! infallible from the core's point of view — a sink that can fail must
//! handle its own failures.

use atelier_types::FinalArtifact;

/// One audit event.
#[derive(Clone, Debug, serde::Serialize)]
pub struct AuditEvent {
    pub event_type: String,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    pub payload: serde_json::Value,
}

impl AuditEvent {
    /// Event recorded after a creation request exports successfully.
    pub fn creation(creator_id: &str, artifact: &FinalArtifact) -> Self {
        Self {
            event_type: "artifact_created".to_string(),
            timestamp: unix_now(),
            payload: serde_json::json!({
                "creator_id": creator_id,
                "path": artifact.path,
                "format": artifact.format,
                "sealed": artifact.sealed,
            }),
        }
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Audit sink contract.
pub trait AuditSink {
    /// Record one event.
    fn record(&self, event: AuditEvent);
}

/// Sink that forwards events to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingSink {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            event_type = %event.event_type,
            timestamp = event.timestamp,
            payload = %event.payload,
            "audit event"
        );
    }
}
