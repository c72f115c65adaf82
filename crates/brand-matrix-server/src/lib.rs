//! Thin HTTP plumbing over the brand-matrix pipeline.
//!
//! Each endpoint hands the pipeline a parsed record and returns its output
//! verbatim as the response body. Requests are lenient by contract: a
//! malformed or absent JSON body is treated as an empty object, never
//! rejected. All degradation rules live in the pipeline, not here.

use axum::{
    Json, Router,
    body::Bytes,
    routing::{get, post},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_http::cors::CorsLayer;
use tracing::info;

use brand_matrix_core::{EvidenceRecord, normalize_research};
use brand_matrix_pipeline::{
    BenefitAttribute, BenefitMatrix, CompetitorComparison, CompetitorEvidence, CompetitorFindings,
    Decision, DetailGaps, DetailSeed, DetailedItem, GridRow, PillarGaps, PlanItem,
    analyze_competitors, build_benefit_matrix, detail_skeleton, map_decisions, plan_skeleton,
};

const SERVICE: &str = "brand-matrix";

/// Build the service router.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/m0-pesquisa", post(m0_research))
        .route("/m0-competidores", post(m0_competitors))
        .route("/m1-beneficios", post(m1_benefits))
        .route("/m2-diferenciais", post(m2_grid))
        .route("/m3-decisao", post(m3_decisions))
        .route("/m4-detalhamento", post(m4_detail))
        .route("/m5-planejamento", post(m5_plan))
        .layer(CorsLayer::permissive())
}

/// Decode a request body, treating malformed or absent JSON as `{}`.
fn lenient<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

// ── Health ──

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ── M0: research normalisation ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResearchRequest {
    brand: String,
    category: String,
    findings: Vec<EvidenceRecord>,
}

#[derive(Serialize)]
struct ResearchResponse {
    brand: String,
    stage: &'static str,
    evidence: Vec<EvidenceRecord>,
    missing_sources: Vec<String>,
}

async fn m0_research(body: Bytes) -> Json<ResearchResponse> {
    let req: ResearchRequest = lenient(&body);
    let out = normalize_research(&req.findings);
    info!(brand = %req.brand, category = %req.category, evidence = out.evidence.len(), "m0-pesquisa");
    Json(ResearchResponse {
        brand: req.brand,
        stage: "pesquisa",
        evidence: out.evidence,
        missing_sources: out.missing_sources,
    })
}

// ── M0b: competitor analysis ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct CompetitorRequest {
    brand: String,
    category: String,
    competitors_findings: Vec<CompetitorFindings>,
}

#[derive(Serialize)]
struct CompetitorResponse {
    brand: String,
    stage: &'static str,
    competitors: Vec<CompetitorEvidence>,
    comparison: Vec<CompetitorComparison>,
}

async fn m0_competitors(body: Bytes) -> Json<CompetitorResponse> {
    let req: CompetitorRequest = lenient(&body);
    let out = analyze_competitors(&req.competitors_findings);
    info!(brand = %req.brand, category = %req.category, competitors = out.competitors.len(), "m0-competidores");
    Json(CompetitorResponse {
        brand: req.brand,
        stage: "competidores",
        competitors: out.competitors,
        comparison: out.comparison,
    })
}

// ── M1: benefit matrix ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct BenefitsRequest {
    brand: String,
    scope: String,
    evidence: Vec<EvidenceRecord>,
    suggestions: Vec<String>,
}

#[derive(Serialize)]
struct BenefitsResponse {
    brand: String,
    stage: &'static str,
    attributes: Vec<BenefitAttribute>,
    suggested: Vec<BenefitAttribute>,
    missing_subbenefits: Vec<PillarGaps>,
}

async fn m1_benefits(body: Bytes) -> Json<BenefitsResponse> {
    let req: BenefitsRequest = lenient(&body);
    let matrix = build_benefit_matrix(&req.evidence, &req.suggestions);
    info!(brand = %req.brand, scope = %req.scope, attributes = matrix.attributes.len(), "m1-beneficios");
    Json(BenefitsResponse {
        brand: req.brand,
        stage: "benefit_matrix",
        attributes: matrix.attributes,
        suggested: matrix.suggested,
        missing_subbenefits: matrix.missing_subbenefits,
    })
}

// ── M2: differential grid ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct FromCompetitors {
    comparison: Vec<CompetitorComparison>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GridRequest {
    brand: String,
    from_m1: BenefitMatrix,
    /// Absent means `true`: the approval gate never weakens by omission.
    use_only_approved: Option<bool>,
    from_competitors: FromCompetitors,
}

#[derive(Serialize)]
struct GridResponse {
    brand: String,
    stage: &'static str,
    grid: Vec<GridRow>,
}

async fn m2_grid(body: Bytes) -> Json<GridResponse> {
    let req: GridRequest = lenient(&body);
    let use_only_approved = req.use_only_approved.unwrap_or(true);
    let grid = brand_matrix_pipeline::score_grid(
        &req.from_m1,
        use_only_approved,
        &req.from_competitors.comparison,
    );
    info!(brand = %req.brand, rows = grid.len(), use_only_approved, "m2-diferenciais");
    Json(GridResponse {
        brand: req.brand,
        stage: "diferenciais_matrix",
        grid,
    })
}

// ── M3: strategic decisions ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct FromM2 {
    grid: Vec<GridRow>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DecisionRequest {
    brand: String,
    from_m2: FromM2,
}

#[derive(Serialize)]
struct DecisionResponse {
    brand: String,
    stage: &'static str,
    decisions: Vec<Decision>,
}

async fn m3_decisions(body: Bytes) -> Json<DecisionResponse> {
    let req: DecisionRequest = lenient(&body);
    let decisions = map_decisions(&req.from_m2.grid);
    info!(brand = %req.brand, decisions = decisions.len(), "m3-decisao");
    Json(DecisionResponse {
        brand: req.brand,
        stage: "decisao_estrategica",
        decisions,
    })
}

// ── M4: detail skeletons ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct FromM3 {
    decisions: Vec<DetailSeed>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DetailRequest {
    brand: String,
    from_m3: FromM3,
}

#[derive(Serialize)]
struct DetailResponse {
    brand: String,
    stage: &'static str,
    detailed: Vec<DetailedItem>,
    gaps: Vec<DetailGaps>,
}

async fn m4_detail(body: Bytes) -> Json<DetailResponse> {
    let req: DetailRequest = lenient(&body);
    let out = detail_skeleton(&req.from_m3.decisions);
    info!(brand = %req.brand, detailed = out.detailed.len(), "m4-detalhamento");
    Json(DetailResponse {
        brand: req.brand,
        stage: "detalhamento",
        detailed: out.detailed,
        gaps: out.gaps,
    })
}

// ── M5: plan skeletons ──

#[derive(Deserialize, Default)]
#[serde(default)]
struct FromM4 {
    detailed: Vec<DetailedItem>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PlanRequest {
    brand: String,
    from_m4: FromM4,
}

#[derive(Serialize)]
struct PlanResponse {
    brand: String,
    stage: &'static str,
    plan: Vec<PlanItem>,
}

async fn m5_plan(body: Bytes) -> Json<PlanResponse> {
    let req: PlanRequest = lenient(&body);
    let plan = plan_skeleton(&req.from_m4.detailed);
    info!(brand = %req.brand, items = plan.len(), "m5-planejamento");
    Json(PlanResponse {
        brand: req.brand,
        stage: "planejamento",
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_falls_back_to_default_on_garbage() {
        let req: GridRequest = lenient(&Bytes::from_static(b"not json at all"));
        assert_eq!(req.brand, "");
        assert!(req.from_m1.attributes.is_empty());
        assert!(req.use_only_approved.is_none());
    }

    #[test]
    fn lenient_accepts_partial_objects() {
        let req: BenefitsRequest =
            lenient(&Bytes::from(r#"{"brand": "Loja Azul"}"#.as_bytes().to_vec()));
        assert_eq!(req.brand, "Loja Azul");
        assert!(req.evidence.is_empty());
        assert!(req.suggestions.is_empty());
    }

    #[test]
    fn lenient_ignores_unknown_fields() {
        let req: DecisionRequest = lenient(&Bytes::from(
            r#"{"brand": "x", "extra": {"a": 1}}"#.as_bytes().to_vec(),
        ));
        assert_eq!(req.brand, "x");
        assert!(req.from_m2.grid.is_empty());
    }
}
