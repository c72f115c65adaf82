//! Evidence normalisation (stage M0).
//!
//! Raw findings arrive as loosely-filled JSON. Normalisation drops records
//! with blank text (silently, not as an error), substitutes a documented
//! placeholder for every other blank field, and reports which mandatory
//! source channels the research pass failed to cover. Downstream stages can
//! therefore assume every field is present and non-null.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Source channels every research pass is expected to cover, in report order.
pub const MANDATORY_SOURCES: [&str; 4] = ["website", "instagram", "facebook", "maps"];

/// A sourced text snippet supporting a slot's presence in brand communication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceRecord {
    pub text: String,
    pub source_type: String,
    pub source_name: String,
    pub url: String,
    /// ISO 8601 timestamp string; opaque to the pipeline.
    pub captured_at: String,
}

/// Normalised research evidence plus the mandatory channels not observed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResearchOutput {
    pub evidence: Vec<EvidenceRecord>,
    pub missing_sources: Vec<String>,
}

/// Replace a blank value with its placeholder, trimming surrounding space.
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalise raw findings into [`EvidenceRecord`]s.
///
/// A record whose text is empty after trimming is dropped. Every other
/// blank field gets its placeholder: `source_type → "unknown"`,
/// `source_name → "N/A"`, `url` and `captured_at` → `""`.
pub fn normalize_research(findings: &[EvidenceRecord]) -> ResearchOutput {
    let mut evidence = Vec::with_capacity(findings.len());
    for raw in findings {
        if raw.text.trim().is_empty() {
            continue;
        }
        evidence.push(EvidenceRecord {
            text: raw.text.trim().to_string(),
            source_type: or_placeholder(&raw.source_type, "unknown"),
            source_name: or_placeholder(&raw.source_name, "N/A"),
            url: or_placeholder(&raw.url, ""),
            captured_at: or_placeholder(&raw.captured_at, ""),
        });
    }

    let missing_sources = MANDATORY_SOURCES
        .iter()
        .filter(|source| !evidence.iter().any(|e| e.source_type == **source))
        .map(|source| source.to_string())
        .collect();

    debug!(
        kept = evidence.len(),
        dropped = findings.len() - evidence.len(),
        "normalised research findings"
    );

    ResearchOutput {
        evidence,
        missing_sources,
    }
}
