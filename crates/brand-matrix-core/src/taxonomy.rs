//! The closed benefit taxonomy: 5 pillars × 6 sub-benefits = 30 fixed slots.
//!
//! The slot set is process-wide immutable configuration; nothing extends it
//! at runtime. Stages that report "per slot" output iterate [`slots`], so
//! registry order is also wire order.
//!
//! Canonical spelling is accented Portuguese for taxonomy names and
//! unaccented snake_case for status codes. Historical pipelines drifted
//! between accented and unaccented identifiers (`convivio` vs `convívio`,
//! `expressao` vs `expressão`); [`canonical_sub_benefit`] and
//! [`canonical_pillar`] fold the known legacy variants back onto the canon.

/// Top-level benefit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    Funcionais,
    Experienciais,
    Sociais,
    Expressivos,
    Realizacao,
}

impl Pillar {
    /// All pillars in registry order.
    pub const ALL: [Pillar; 5] = [
        Pillar::Funcionais,
        Pillar::Experienciais,
        Pillar::Sociais,
        Pillar::Expressivos,
        Pillar::Realizacao,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Funcionais => "funcionais",
            Pillar::Experienciais => "experienciais",
            Pillar::Sociais => "sociais",
            Pillar::Expressivos => "expressivos",
            Pillar::Realizacao => "realização",
        }
    }

    /// The six sub-benefits of this pillar, in registry order.
    pub fn sub_benefits(&self) -> &'static [&'static str; 6] {
        match self {
            Pillar::Funcionais => &[
                "conveniência",
                "qualidade",
                "preço",
                "variedade",
                "rapidez",
                "garantia",
            ],
            Pillar::Experienciais => &[
                "atendimento",
                "ambiente",
                "sensorial",
                "personalização",
                "descoberta",
                "consistência",
            ],
            Pillar::Sociais => &[
                "convívio",
                "comunidade",
                "pertencimento",
                "reconhecimento",
                "indicação",
                "confiança",
            ],
            Pillar::Expressivos => &[
                "expressão",
                "estilo",
                "identidade",
                "status",
                "exclusividade",
                "autenticidade",
            ],
            Pillar::Realizacao => &[
                "propósito",
                "crescimento",
                "bem-estar",
                "autonomia",
                "segurança",
                "conquista",
            ],
        }
    }
}

/// One of the 30 fixed `(pillar, sub_benefit)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub pillar: Pillar,
    pub sub_benefit: &'static str,
}

/// The conservative fallback slot for text no keyword rule claims.
pub const FALLBACK_SLOT: Slot = Slot {
    pillar: Pillar::Funcionais,
    sub_benefit: "conveniência",
};

/// Iterate all 30 slots in registry order.
pub fn slots() -> impl Iterator<Item = Slot> {
    Pillar::ALL.into_iter().flat_map(|pillar| {
        pillar
            .sub_benefits()
            .iter()
            .copied()
            .map(move |sub_benefit| Slot { pillar, sub_benefit })
    })
}

/// Fold legacy unaccented pillar identifiers onto the canonical spelling.
///
/// Unknown names pass through unchanged; matching against the registry
/// simply fails for them, which is the conservative outcome.
pub fn canonical_pillar(name: &str) -> &str {
    match name.trim() {
        "realizacao" => "realização",
        other => other,
    }
}

/// Fold legacy unaccented sub-benefit identifiers onto the canonical spelling.
pub fn canonical_sub_benefit(name: &str) -> &str {
    match name.trim() {
        "conveniencia" => "conveniência",
        "preco" => "preço",
        "personalizacao" => "personalização",
        "consistencia" => "consistência",
        "convivio" => "convívio",
        "indicacao" => "indicação",
        "confianca" => "confiança",
        "expressao" => "expressão",
        "proposito" => "propósito",
        "bem_estar" => "bem-estar",
        "seguranca" => "segurança",
        "superacao" => "superação",
        other => other,
    }
}
