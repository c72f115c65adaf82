//! Competitor evidence analysis (stage M0b).
//!
//! Normalises per-competitor findings with the same rules as M0, then runs
//! every surviving snippet through the classifier to build a found/not-found
//! matrix across all 30 taxonomy slots per competitor.

use std::collections::HashSet;

use brand_matrix_core::{EvidenceRecord, Slot, classify, normalize_research, slots};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw per-competitor findings as submitted by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompetitorFindings {
    pub competitor: String,
    pub findings: Vec<EvidenceRecord>,
}

/// Normalised evidence for one competitor.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitorEvidence {
    pub competitor: String,
    pub evidence: Vec<EvidenceRecord>,
}

/// Whether a competitor's evidence covered one taxonomy slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotPresence {
    pub pillar: String,
    pub sub_benefit: String,
    pub found: bool,
}

/// One competitor's coverage across the full 30-slot taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorComparison {
    pub competitor: String,
    pub slots: Vec<SlotPresence>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetitorOutput {
    pub competitors: Vec<CompetitorEvidence>,
    pub comparison: Vec<CompetitorComparison>,
}

/// Analyse competitor findings into normalised evidence plus a comparison
/// matrix.
///
/// Competitors with a blank name, or none of whose findings survive
/// normalisation, are dropped silently.
pub fn analyze_competitors(input: &[CompetitorFindings]) -> CompetitorOutput {
    let mut out = CompetitorOutput::default();

    for entry in input {
        let name = entry.competitor.trim();
        if name.is_empty() {
            continue;
        }

        let normalized = normalize_research(&entry.findings);
        if normalized.evidence.is_empty() {
            continue;
        }

        let covered: HashSet<Slot> = normalized
            .evidence
            .iter()
            .map(|record| classify(&record.text))
            .collect();

        out.comparison.push(CompetitorComparison {
            competitor: name.to_string(),
            slots: slots()
                .map(|slot| SlotPresence {
                    pillar: slot.pillar.as_str().to_string(),
                    sub_benefit: slot.sub_benefit.to_string(),
                    found: covered.contains(&slot),
                })
                .collect(),
        });
        out.competitors.push(CompetitorEvidence {
            competitor: name.to_string(),
            evidence: normalized.evidence,
        });
    }

    debug!(competitors = out.competitors.len(), "analysed competitor evidence");
    out
}
