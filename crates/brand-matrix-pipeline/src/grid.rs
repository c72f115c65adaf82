//! Usage × relevance scoring across the full taxonomy (stage M2).
//!
//! The defining invariant is completeness: the grid always has exactly 30
//! rows, one per registry slot in registry order, whether or not any
//! evidence exists. Downstream stages rely on this to report the whole
//! taxonomy rather than only what was found.

use brand_matrix_core::{
    EvidenceRecord, Priority, Recommendation, RelevanceLevel, Slot, UsageLevel, canonical_pillar,
    canonical_sub_benefit, slots,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::competitor::CompetitorComparison;
use crate::matrix::{BenefitAttribute, BenefitMatrix};

/// One scored row of the differential grid.
///
/// `found` and `approved` are carried so the decision stage can condition
/// on them without re-deriving approval from the evidence list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridRow {
    pub pillar: String,
    pub sub_benefit: String,
    pub usage_level: String,
    pub relevance_level: String,
    pub recommendation: String,
    pub priority: String,
    pub parity: bool,
    pub opportunity: bool,
    pub found: bool,
    pub approved: bool,
    pub evidence: Vec<EvidenceRecord>,
}

/// True when the attribute row names this slot, accepting legacy spellings.
fn names_slot(attr: &BenefitAttribute, slot: Slot) -> bool {
    canonical_pillar(&attr.pillar) == slot.pillar.as_str()
        && canonical_sub_benefit(&attr.sub_benefit) == slot.sub_benefit
}

/// Score the full 30-slot grid from the benefit matrix and competitor
/// comparison.
///
/// With `use_only_approved`, unapproved content is never promoted: gated
/// slots score `nao_tem`/`um_pouco_comum` and fall back to `avaliar/baixa`
/// regardless of what was found.
pub fn score_grid(
    matrix: &BenefitMatrix,
    use_only_approved: bool,
    comparison: &[CompetitorComparison],
) -> Vec<GridRow> {
    let grid: Vec<GridRow> = slots()
        .map(|slot| {
            let matching: Vec<&BenefitAttribute> = matrix
                .attributes
                .iter()
                .filter(|attr| names_slot(attr, slot))
                .collect();
            let found = matching.iter().any(|attr| attr.found);
            let approved = matching.iter().any(|attr| attr.found && attr.approved);

            let competitor_count = comparison
                .iter()
                .filter(|c| {
                    c.slots.iter().any(|s| {
                        s.found
                            && canonical_pillar(&s.pillar) == slot.pillar.as_str()
                            && canonical_sub_benefit(&s.sub_benefit) == slot.sub_benefit
                    })
                })
                .count();
            let parity = competitor_count >= 2;
            let opportunity = competitor_count <= 1;

            let gated = use_only_approved && !approved;
            let (usage, relevance) = if gated || !found {
                (UsageLevel::NaoTem, RelevanceLevel::UmPoucoComum)
            } else {
                (UsageLevel::TemosMuito, RelevanceLevel::GeraValor)
            };

            let effective = found && !gated;
            let (recommendation, priority) = if effective {
                if opportunity {
                    (Recommendation::Proteger, Priority::Alta)
                } else if parity {
                    (Recommendation::Manter, Priority::Media)
                } else {
                    (Recommendation::Aprimorar, Priority::Media)
                }
            } else {
                // Absent, suggested-only, and approval-gated slots all stay
                // at the conservative default.
                (Recommendation::Avaliar, Priority::Baixa)
            };

            let evidence = matching
                .iter()
                .filter(|attr| attr.found && (!use_only_approved || attr.approved))
                .map(|attr| attr.evidence.clone())
                .collect();

            GridRow {
                pillar: slot.pillar.as_str().to_string(),
                sub_benefit: slot.sub_benefit.to_string(),
                usage_level: usage.as_str().to_string(),
                relevance_level: relevance.as_str().to_string(),
                recommendation: recommendation.as_str().to_string(),
                priority: priority.as_str().to_string(),
                parity,
                opportunity,
                found,
                approved,
                evidence,
            }
        })
        .collect();

    debug!(
        rows = grid.len(),
        competitors = comparison.len(),
        use_only_approved,
        "scored differential grid"
    );
    grid
}
