//! Staged brand-differentiation pipeline: competitor analysis (M0b), the
//! benefit matrix (M1), usage × relevance scoring (M2), strategic decisions
//! (M3), and the detail/plan skeletons (M4/M5).
//!
//! Every stage is a pure function over the caller-supplied prior-stage
//! payload. No stage performs I/O or keeps state between calls; the caller
//! persists each output and resupplies it to the next stage.

pub mod competitor;
pub mod decision;
pub mod grid;
pub mod matrix;
pub mod skeleton;

pub use competitor::{
    CompetitorComparison, CompetitorEvidence, CompetitorFindings, CompetitorOutput, SlotPresence,
    analyze_competitors,
};
pub use decision::{Decision, map_decisions};
pub use grid::{GridRow, score_grid};
pub use matrix::{BenefitAttribute, BenefitMatrix, PillarGaps, build_benefit_matrix};
pub use skeleton::{
    ActionBlock, DetailGaps, DetailOutput, DetailSeed, DetailedItem, PlanItem, detail_skeleton,
    plan_skeleton,
};
