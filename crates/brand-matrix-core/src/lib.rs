//! Core domain for brand-matrix: the closed benefit taxonomy, the keyword
//! classifier, and evidence normalisation (stage M0).

pub mod classifier;
pub mod evidence;
pub mod levels;
pub mod taxonomy;

pub use classifier::classify;
pub use evidence::{EvidenceRecord, MANDATORY_SOURCES, ResearchOutput, normalize_research};
pub use levels::{Priority, Recommendation, RelevanceLevel, UsageLevel};
pub use taxonomy::{FALLBACK_SLOT, Pillar, Slot, canonical_pillar, canonical_sub_benefit, slots};
