//! Strategic decision mapping (stage M3).
//!
//! Maps each scored grid row to a two-axis strategic quadrant plus a
//! human-readable argument. Decisions are only produced for slots with
//! approved, found evidence; everything else gets the `pendente` sentinel
//! on both axes with a fixed awaiting-approval argument.

use brand_matrix_core::{Recommendation, RelevanceLevel, UsageLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::GridRow;

/// Sentinel axis value for slots that cannot be decided yet.
pub const PENDING: &str = "pendente";

const PENDING_ARGUMENT: &str = "Aguardando aprovação e evidência para decidir.";

/// One strategic decision for a taxonomy slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Decision {
    pub pillar: String,
    pub sub_benefit: String,
    pub decision_usage: String,
    pub decision_relevance: String,
    pub argument: String,
}

/// The quadrant policy table: recommendation → (usage axis, relevance axis,
/// argument). [`Recommendation::from_wire`] folds unrecognized values onto
/// `avaliar`, which doubles as the table's catch-all default.
fn quadrant(recommendation: Recommendation) -> (UsageLevel, RelevanceLevel, &'static str) {
    match recommendation {
        Recommendation::Proteger => (
            UsageLevel::TemosMuito,
            RelevanceLevel::PodeGerarMuitoValor,
            "Diferencial raro entre os concorrentes: proteger e comunicar com prioridade.",
        ),
        Recommendation::Manter => (
            UsageLevel::TemosMuito,
            RelevanceLevel::GeraValor,
            "Benefício em paridade com o mercado: manter o nível atual de entrega.",
        ),
        Recommendation::Aprimorar => (
            UsageLevel::TemosPouco,
            RelevanceLevel::GeraValor,
            "Benefício presente mas abaixo do potencial: aprimorar entrega e comunicação.",
        ),
        Recommendation::Desenvolver => (
            UsageLevel::NaoTem,
            RelevanceLevel::PodeGerarMuitoValor,
            "Benefício ausente com alto potencial: desenvolver do zero.",
        ),
        Recommendation::Reduzir => (
            UsageLevel::TemosMuito,
            RelevanceLevel::UmPoucoComum,
            "Benefício com baixo retorno percebido: reduzir o investimento.",
        ),
        Recommendation::Eliminar => (
            UsageLevel::TemosPouco,
            RelevanceLevel::UmPoucoComum,
            "Benefício irrelevante para a marca: eliminar da comunicação.",
        ),
        Recommendation::Avaliar => (
            UsageLevel::NaoTem,
            RelevanceLevel::UmPoucoComum,
            "Evidência insuficiente: avaliar antes de investir.",
        ),
    }
}

/// Map scored grid rows to strategic decisions, one per row.
pub fn map_decisions(grid: &[GridRow]) -> Vec<Decision> {
    let decisions: Vec<Decision> = grid
        .iter()
        .map(|row| {
            if !(row.approved && row.found) {
                return Decision {
                    pillar: row.pillar.clone(),
                    sub_benefit: row.sub_benefit.clone(),
                    decision_usage: PENDING.to_string(),
                    decision_relevance: PENDING.to_string(),
                    argument: PENDING_ARGUMENT.to_string(),
                };
            }

            let (usage, relevance, argument) =
                quadrant(Recommendation::from_wire(&row.recommendation));
            Decision {
                pillar: row.pillar.clone(),
                sub_benefit: row.sub_benefit.clone(),
                decision_usage: usage.as_str().to_string(),
                decision_relevance: relevance.as_str().to_string(),
                argument: argument.to_string(),
            }
        })
        .collect();

    let pending = decisions
        .iter()
        .filter(|d| d.decision_usage == PENDING)
        .count();
    debug!(decisions = decisions.len(), pending, "mapped strategic decisions");
    decisions
}
