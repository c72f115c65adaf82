//! Keyword classification of free-text brand evidence into taxonomy slots.
//!
//! The rule table is an ordered priority list, not a set: the first group
//! with any keyword contained case-insensitively in the input wins, and
//! reordering the table changes classification outcomes. Text no rule
//! claims falls back to [`FALLBACK_SLOT`], so `classify` is total.
//!
//! Keyword groups keep both accented and unaccented spellings on purpose;
//! the historical pipelines drifted between the two and evidence quotes
//! arrive in either form.

use crate::taxonomy::{FALLBACK_SLOT, Pillar, Slot};

struct Rule {
    keywords: &'static [&'static str],
    pillar: Pillar,
    sub_benefit: &'static str,
}

const fn rule(
    keywords: &'static [&'static str],
    pillar: Pillar,
    sub_benefit: &'static str,
) -> Rule {
    Rule {
        keywords,
        pillar,
        sub_benefit,
    }
}

/// Ordered keyword rules. Earlier groups take priority over later ones.
const RULES: &[Rule] = &[
    // funcionais
    rule(
        &[
            "preço",
            "preco",
            "barato",
            "desconto",
            "promoção",
            "promocao",
            "custo benefício",
            "custo beneficio",
        ],
        Pillar::Funcionais,
        "preço",
    ),
    rule(
        &["rápido", "rapido", "rapidez", "agilidade", "em minutos", "sem fila"],
        Pillar::Funcionais,
        "rapidez",
    ),
    rule(
        &[
            "entrega",
            "delivery",
            "whatsapp",
            "pix",
            "facilidade",
            "perto de casa",
            "horário estendido",
            "horario estendido",
        ],
        Pillar::Funcionais,
        "conveniência",
    ),
    rule(
        &["qualidade", "premium", "durável", "duravel", "bem feito", "acabamento"],
        Pillar::Funcionais,
        "qualidade",
    ),
    rule(
        &["variedade", "opções", "opcoes", "sortimento", "catálogo", "catalogo"],
        Pillar::Funcionais,
        "variedade",
    ),
    rule(
        &[
            "garantia",
            "troca grátis",
            "troca gratis",
            "devolução",
            "devolucao",
            "assistência",
            "assistencia",
        ],
        Pillar::Funcionais,
        "garantia",
    ),
    // experienciais
    rule(
        &["atendimento", "suporte", "atencioso", "simpatia", "equipe"],
        Pillar::Experienciais,
        "atendimento",
    ),
    rule(
        &[
            "ambiente",
            "aconchegante",
            "decoração",
            "decoracao",
            "espaço agradável",
            "espaco agradavel",
        ],
        Pillar::Experienciais,
        "ambiente",
    ),
    rule(
        &["sabor", "aroma", "cheiro", "textura"],
        Pillar::Experienciais,
        "sensorial",
    ),
    rule(
        &[
            "personalizado",
            "personalização",
            "personalizacao",
            "sob medida",
            "do seu jeito",
        ],
        Pillar::Experienciais,
        "personalização",
    ),
    rule(
        &["novidade", "lançamento", "lancamento", "descobrir", "surpresa"],
        Pillar::Experienciais,
        "descoberta",
    ),
    rule(
        &[
            "consistência",
            "consistencia",
            "padrão de qualidade",
            "padrao de qualidade",
            "sempre igual",
        ],
        Pillar::Experienciais,
        "consistência",
    ),
    // sociais
    rule(
        &["convívio", "convivio", "com amigos", "em família", "em familia", "juntos"],
        Pillar::Sociais,
        "convívio",
    ),
    rule(
        &["comunidade", "do bairro", "clube de clientes", "grupo de clientes"],
        Pillar::Sociais,
        "comunidade",
    ),
    rule(
        &["pertencimento", "fazer parte", "se sentir em casa"],
        Pillar::Sociais,
        "pertencimento",
    ),
    rule(
        &["reconhecimento", "prestígio", "prestigio", "admiração", "admiracao"],
        Pillar::Sociais,
        "reconhecimento",
    ),
    rule(
        &["indicação", "indicacao", "recomendo", "boca a boca"],
        Pillar::Sociais,
        "indicação",
    ),
    rule(
        &[
            "confiança",
            "confianca",
            "confiável",
            "confiavel",
            "tradição",
            "tradicao",
        ],
        Pillar::Sociais,
        "confiança",
    ),
    // expressivos
    rule(
        &["expressão", "expressao", "se expressar", "do meu jeito"],
        Pillar::Expressivos,
        "expressão",
    ),
    rule(
        &["estilo", "tendência", "tendencia", "visual", "look"],
        Pillar::Expressivos,
        "estilo",
    ),
    rule(
        &["identidade", "combina comigo", "a minha cara"],
        Pillar::Expressivos,
        "identidade",
    ),
    rule(
        &["status", "luxo", "sofisticado", "sofisticação", "sofisticacao"],
        Pillar::Expressivos,
        "status",
    ),
    rule(
        &[
            "exclusivo",
            "exclusividade",
            "edição limitada",
            "edicao limitada",
            "só aqui",
            "so aqui",
        ],
        Pillar::Expressivos,
        "exclusividade",
    ),
    rule(
        &["autêntico", "autentico", "original", "artesanal", "verdadeiro"],
        Pillar::Expressivos,
        "autenticidade",
    ),
    // realização
    rule(
        &[
            "propósito",
            "proposito",
            "impacto social",
            "sustentável",
            "sustentavel",
            "causa",
        ],
        Pillar::Realizacao,
        "propósito",
    ),
    rule(
        &["crescimento", "aprender", "evoluir", "desenvolvimento"],
        Pillar::Realizacao,
        "crescimento",
    ),
    rule(
        &[
            "bem-estar",
            "bem estar",
            "saúde",
            "saude",
            "equilíbrio",
            "equilibrio",
            "relaxar",
        ],
        Pillar::Realizacao,
        "bem-estar",
    ),
    rule(
        &["autonomia", "liberdade", "independência", "independencia"],
        Pillar::Realizacao,
        "autonomia",
    ),
    rule(
        &["segurança", "seguranca", "proteção", "protecao", "tranquilidade"],
        Pillar::Realizacao,
        "segurança",
    ),
    rule(
        &["conquista", "superação", "superacao", "orgulho"],
        Pillar::Realizacao,
        "conquista",
    ),
];

/// Classify a free-text snippet into a taxonomy slot.
///
/// Deterministic and total: the same text always maps to the same slot, and
/// text no keyword group claims maps to [`FALLBACK_SLOT`].
pub fn classify(text: &str) -> Slot {
    let lowered = text.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Slot {
                pillar: rule.pillar,
                sub_benefit: rule.sub_benefit,
            };
        }
    }
    FALLBACK_SLOT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::slots;

    #[test]
    fn classification_is_deterministic() {
        let text = "entrega via whatsapp e pix";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn delivery_snippet_maps_to_conveniencia() {
        let slot = classify("entrega via whatsapp e pix");
        assert_eq!(slot.pillar, Pillar::Funcionais);
        assert_eq!(slot.sub_benefit, "conveniência");
    }

    #[test]
    fn earlier_group_wins_on_conflict() {
        // "entrega" belongs to the group at index 2, "garantia" to index 5;
        // the earlier group must win.
        let slot = classify("entrega com garantia estendida");
        assert_eq!(slot.sub_benefit, "conveniência");

        // Reversed word order must not change the outcome.
        let slot = classify("garantia estendida na entrega");
        assert_eq!(slot.sub_benefit, "conveniência");
    }

    #[test]
    fn unmatched_text_falls_back() {
        for text in ["", "42", "nada a ver", "zzz"] {
            let slot = classify(text);
            assert_eq!(slot, FALLBACK_SLOT, "{text:?}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let slot = classify("ENTREGA VIA WHATSAPP");
        assert_eq!(slot.sub_benefit, "conveniência");
        let slot = classify("Preço Justo");
        assert_eq!(slot.sub_benefit, "preço");
    }

    #[test]
    fn every_rule_resolves_to_its_own_slot() {
        // The first keyword of each group must not be shadowed by an
        // earlier group, and every target must be a real registry slot.
        for rule in RULES {
            let slot = classify(rule.keywords[0]);
            assert_eq!(slot.pillar, rule.pillar, "{}", rule.keywords[0]);
            assert_eq!(slot.sub_benefit, rule.sub_benefit, "{}", rule.keywords[0]);
            assert!(
                slots().any(|s| s.pillar == rule.pillar && s.sub_benefit == rule.sub_benefit),
                "rule targets unknown slot {}/{}",
                rule.pillar.as_str(),
                rule.sub_benefit
            );
        }
    }

    #[test]
    fn accented_and_unaccented_variants_agree() {
        assert_eq!(classify("ótima variedade"), classify("otimas opcoes"));
        assert_eq!(classify("segurança total"), classify("seguranca total"));
    }

    #[test]
    fn result_is_always_a_registry_slot() {
        for text in ["entrega", "luxo", "qualquer coisa", ""] {
            let slot = classify(text);
            assert!(slots().any(|s| s == slot), "{text:?} → {slot:?}");
        }
    }
}
