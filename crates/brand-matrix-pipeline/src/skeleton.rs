//! Detail and plan skeletons (stages M4 and M5).
//!
//! Both stages are structural expansions: they never synthesise narrative
//! content, only lay out the fields a human (or a downstream collaborator
//! working from approved evidence) fills in. Re-running either stage on an
//! unedited input yields identical output.

use brand_matrix_core::{canonical_pillar, canonical_sub_benefit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Narrative field names of a detailed item, in report order.
pub const DETAIL_FIELDS: [&str; 7] = [
    "porque",
    "racional",
    "emocional",
    "tangivel",
    "intangivel",
    "positivo",
    "negativo",
];

/// M4 input: a decided slot, optionally carrying narrative fields the
/// caller already filled in a previous round.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailSeed {
    pub pillar: String,
    pub sub_benefit: String,
    pub differential: String,
    pub porque: String,
    pub racional: String,
    pub emocional: String,
    pub tangivel: String,
    pub intangivel: String,
    pub positivo: String,
    pub negativo: String,
}

/// Seven-field narrative record for one differential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedItem {
    pub differential: String,
    pub porque: String,
    pub racional: String,
    pub emocional: String,
    pub tangivel: String,
    pub intangivel: String,
    pub positivo: String,
    pub negativo: String,
}

impl DetailedItem {
    fn field(&self, name: &str) -> &str {
        match name {
            "porque" => &self.porque,
            "racional" => &self.racional,
            "emocional" => &self.emocional,
            "tangivel" => &self.tangivel,
            "intangivel" => &self.intangivel,
            "positivo" => &self.positivo,
            "negativo" => &self.negativo,
            _ => "",
        }
    }
}

/// Fields of one detailed item still waiting for content.
#[derive(Debug, Clone, Serialize)]
pub struct DetailGaps {
    pub differential: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetailOutput {
    pub detailed: Vec<DetailedItem>,
    pub gaps: Vec<DetailGaps>,
}

/// A Say / Show / Do action placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionBlock {
    pub o_que: String,
    pub onde: Vec<String>,
    pub como: String,
}

/// Three-action communication skeleton for one differential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanItem {
    pub differential: String,
    pub dizer: ActionBlock,
    pub mostrar: ActionBlock,
    pub fazer: ActionBlock,
}

/// Expand decided slots into detail skeletons (stage M4).
///
/// Caller-provided narrative values are preserved; the gap list names the
/// fields still empty. Content is never auto-filled.
pub fn detail_skeleton(seeds: &[DetailSeed]) -> DetailOutput {
    let mut out = DetailOutput::default();

    for seed in seeds {
        let differential = if seed.differential.trim().is_empty() {
            format!(
                "{}/{}",
                canonical_pillar(&seed.pillar),
                canonical_sub_benefit(&seed.sub_benefit)
            )
        } else {
            seed.differential.trim().to_string()
        };

        let item = DetailedItem {
            differential: differential.clone(),
            porque: seed.porque.trim().to_string(),
            racional: seed.racional.trim().to_string(),
            emocional: seed.emocional.trim().to_string(),
            tangivel: seed.tangivel.trim().to_string(),
            intangivel: seed.intangivel.trim().to_string(),
            positivo: seed.positivo.trim().to_string(),
            negativo: seed.negativo.trim().to_string(),
        };

        let missing = DETAIL_FIELDS
            .iter()
            .filter(|name| item.field(name).is_empty())
            .map(|name| name.to_string())
            .collect();

        out.detailed.push(item);
        out.gaps.push(DetailGaps {
            differential,
            missing,
        });
    }

    debug!(items = out.detailed.len(), "expanded detail skeletons");
    out
}

/// Expand detailed items into plan skeletons (stage M5).
///
/// Pure structural expansion: every action block starts empty.
pub fn plan_skeleton(detailed: &[DetailedItem]) -> Vec<PlanItem> {
    detailed
        .iter()
        .map(|item| PlanItem {
            differential: item.differential.clone(),
            ..PlanItem::default()
        })
        .collect()
}
