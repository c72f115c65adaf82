//! Status vocabularies for the differential grid and strategic decisions.
//!
//! Wire values are unaccented snake_case codes. Parsing is total: unknown
//! input degrades to the most conservative variant instead of failing.

/// How strongly the brand already delivers a benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    NaoTem,
    TemosPouco,
    TemosMuito,
}

impl UsageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageLevel::NaoTem => "nao_tem",
            UsageLevel::TemosPouco => "temos_pouco",
            UsageLevel::TemosMuito => "temos_muito",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "temos_pouco" => UsageLevel::TemosPouco,
            "temos_muito" => UsageLevel::TemosMuito,
            _ => UsageLevel::NaoTem,
        }
    }
}

/// How much customer value a benefit can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceLevel {
    UmPoucoComum,
    GeraValor,
    PodeGerarMuitoValor,
}

impl RelevanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceLevel::UmPoucoComum => "um_pouco_comum",
            RelevanceLevel::GeraValor => "gera_valor",
            RelevanceLevel::PodeGerarMuitoValor => "pode_gerar_muito_valor",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "gera_valor" => RelevanceLevel::GeraValor,
            "pode_gerar_muito_valor" => RelevanceLevel::PodeGerarMuitoValor,
            _ => RelevanceLevel::UmPoucoComum,
        }
    }
}

/// Strategic recommendation for one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Avaliar,
    Proteger,
    Aprimorar,
    Desenvolver,
    Manter,
    Reduzir,
    Eliminar,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Avaliar => "avaliar",
            Recommendation::Proteger => "proteger",
            Recommendation::Aprimorar => "aprimorar",
            Recommendation::Desenvolver => "desenvolver",
            Recommendation::Manter => "manter",
            Recommendation::Reduzir => "reduzir",
            Recommendation::Eliminar => "eliminar",
        }
    }

    /// Total parse: unrecognized values fall back to `avaliar`.
    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "proteger" => Recommendation::Proteger,
            "aprimorar" => Recommendation::Aprimorar,
            "desenvolver" => Recommendation::Desenvolver,
            "manter" => Recommendation::Manter,
            "reduzir" => Recommendation::Reduzir,
            "eliminar" => Recommendation::Eliminar,
            _ => Recommendation::Avaliar,
        }
    }
}

/// Execution priority attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Baixa,
    Media,
    Alta,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Baixa => "baixa",
            Priority::Media => "media",
            Priority::Alta => "alta",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "media" => Priority::Media,
            "alta" => Priority::Alta,
            _ => Priority::Baixa,
        }
    }
}
