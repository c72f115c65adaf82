//! Benefit matrix construction (stage M1).
//!
//! Classifies approved-workflow evidence into taxonomy slots and separately
//! tracks caller-submitted suggestions (classifier-proposed slots with no
//! evidence backing). Approval is a caller decision; this stage never sets
//! `approved` itself.

use brand_matrix_core::{EvidenceRecord, Pillar, classify};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A taxonomy slot annotated with one evidence record and workflow flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitAttribute {
    pub pillar: String,
    pub sub_benefit: String,
    pub evidence: EvidenceRecord,
    pub found: bool,
    pub approved: bool,
    pub suggested: bool,
}

/// Sub-benefits of one pillar with zero classified evidence rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarGaps {
    pub pillar: String,
    pub sub_benefits: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitMatrix {
    pub attributes: Vec<BenefitAttribute>,
    pub suggested: Vec<BenefitAttribute>,
    pub missing_subbenefits: Vec<PillarGaps>,
}

fn attribute(slot: brand_matrix_core::Slot, evidence: EvidenceRecord, found: bool) -> BenefitAttribute {
    BenefitAttribute {
        pillar: slot.pillar.as_str().to_string(),
        sub_benefit: slot.sub_benefit.to_string(),
        evidence,
        found,
        approved: false,
        suggested: !found,
    }
}

/// Build the benefit matrix from normalised evidence and free-text
/// suggestions.
///
/// Evidence rows come out `found=true, approved=false, suggested=false`.
/// Suggestion rows come out `found=false, suggested=true` with an empty
/// evidence record; suggestions never fabricate evidence.
/// `missing_subbenefits` lists, per pillar, every sub-benefit with zero
/// classified evidence rows (suggestions do not count as coverage).
pub fn build_benefit_matrix(
    evidence: &[EvidenceRecord],
    suggestions: &[String],
) -> BenefitMatrix {
    let mut attributes = Vec::with_capacity(evidence.len());
    for record in evidence {
        if record.text.trim().is_empty() {
            continue;
        }
        attributes.push(attribute(classify(&record.text), record.clone(), true));
    }

    let mut suggested = Vec::with_capacity(suggestions.len());
    for text in suggestions {
        if text.trim().is_empty() {
            continue;
        }
        suggested.push(attribute(classify(text), EvidenceRecord::default(), false));
    }

    let missing_subbenefits = Pillar::ALL
        .iter()
        .map(|pillar| PillarGaps {
            pillar: pillar.as_str().to_string(),
            sub_benefits: pillar
                .sub_benefits()
                .iter()
                .filter(|sub_benefit| {
                    !attributes.iter().any(|a| {
                        a.pillar == pillar.as_str() && a.sub_benefit == **sub_benefit
                    })
                })
                .map(|sub_benefit| sub_benefit.to_string())
                .collect(),
        })
        .collect();

    debug!(
        attributes = attributes.len(),
        suggested = suggested.len(),
        "built benefit matrix"
    );

    BenefitMatrix {
        attributes,
        suggested,
        missing_subbenefits,
    }
}
