//! End-to-end endpoint tests: serve the router on an ephemeral port and
//! drive it over HTTP with reqwest.

use serde_json::{Value, json};

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, brand_matrix_server::app())
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

async fn post(base: &str, path: &str, body: Value) -> Value {
    let response = reqwest::Client::new()
        .post(format!("{base}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success(), "{path}");
    response.json().await.unwrap()
}

#[tokio::test]
async fn health_reports_the_service() {
    let base = spawn_server().await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("brand-matrix"));
}

#[tokio::test]
async fn m0_reports_missing_sources_in_registry_order() {
    let base = spawn_server().await;
    let body = post(
        &base,
        "/m0-pesquisa",
        json!({
            "brand": "Loja Azul",
            "category": "varejo",
            "findings": [
                {"text": "entrega no mesmo dia", "source_type": "website"},
                {"text": "avaliações cinco estrelas", "source_type": "maps"},
                {"text": "   "}
            ]
        }),
    )
    .await;

    assert_eq!(body["brand"], json!("Loja Azul"));
    assert_eq!(body["stage"], json!("pesquisa"));
    assert_eq!(body["evidence"].as_array().unwrap().len(), 2);
    assert_eq!(body["missing_sources"], json!(["instagram", "facebook"]));
}

#[tokio::test]
async fn m1_classifies_whatsapp_evidence_into_conveniencia() {
    let base = spawn_server().await;
    let body = post(
        &base,
        "/m1-beneficios",
        json!({
            "brand": "Loja Azul",
            "scope": "comunicação digital",
            "evidence": [{"text": "entrega via whatsapp e pix", "source_type": "app"}]
        }),
    )
    .await;

    let attributes = body["attributes"].as_array().unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0]["pillar"], json!("funcionais"));
    assert_eq!(attributes[0]["sub_benefit"], json!("conveniência"));
    assert_eq!(attributes[0]["found"], json!(true));
    assert_eq!(attributes[0]["approved"], json!(false));

    let funcionais = body["missing_subbenefits"]
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["pillar"] == json!("funcionais"))
        .unwrap();
    let missing = funcionais["sub_benefits"].as_array().unwrap();
    assert_eq!(missing.len(), 5);
    assert!(!missing.contains(&json!("conveniência")));
}

#[tokio::test]
async fn m2_grid_always_has_thirty_rows() {
    let base = spawn_server().await;
    let body = post(&base, "/m2-diferenciais", json!({"brand": "Loja Azul"})).await;
    assert_eq!(body["stage"], json!("diferenciais_matrix"));
    assert_eq!(body["grid"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn malformed_bodies_degrade_to_empty_objects() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/m2-diferenciais"))
        .body("isto não é json")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["brand"], json!(""));
    assert_eq!(body["grid"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn absent_body_is_treated_as_empty_object() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/m5-planejamento"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["plan"], json!([]));
}

#[tokio::test]
async fn m3_keeps_unapproved_rows_pending() {
    let base = spawn_server().await;

    // Unapproved evidence: M2 gates it, M3 must refuse to decide.
    let grid_body = post(
        &base,
        "/m2-diferenciais",
        json!({
            "brand": "Loja Azul",
            "from_m1": {
                "attributes": [{
                    "pillar": "funcionais",
                    "sub_benefit": "conveniência",
                    "evidence": {"text": "entrega via whatsapp"},
                    "found": true,
                    "approved": false,
                    "suggested": false
                }]
            },
            "use_only_approved": true
        }),
    )
    .await;

    let decisions_body = post(
        &base,
        "/m3-decisao",
        json!({"brand": "Loja Azul", "from_m2": {"grid": grid_body["grid"]}}),
    )
    .await;

    let decisions = decisions_body["decisions"].as_array().unwrap();
    assert_eq!(decisions.len(), 30);
    for decision in decisions {
        assert_eq!(decision["decision_usage"], json!("pendente"));
    }
}

#[tokio::test]
async fn approved_pipeline_flows_from_m2_to_m5() {
    let base = spawn_server().await;

    let grid_body = post(
        &base,
        "/m2-diferenciais",
        json!({
            "brand": "Loja Azul",
            "from_m1": {
                "attributes": [{
                    "pillar": "funcionais",
                    "sub_benefit": "conveniência",
                    "evidence": {"text": "entrega via whatsapp e pix", "source_type": "app"},
                    "found": true,
                    "approved": true,
                    "suggested": false
                }]
            },
            "use_only_approved": true
        }),
    )
    .await;

    let conveniencia = grid_body["grid"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["sub_benefit"] == json!("conveniência"))
        .unwrap();
    assert_eq!(conveniencia["usage_level"], json!("temos_muito"));
    assert_eq!(conveniencia["recommendation"], json!("proteger"));

    let decisions_body = post(
        &base,
        "/m3-decisao",
        json!({"brand": "Loja Azul", "from_m2": {"grid": grid_body["grid"]}}),
    )
    .await;
    let decided: Vec<&Value> = decisions_body["decisions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["decision_usage"] != json!("pendente"))
        .collect();
    assert_eq!(decided.len(), 1);
    assert_eq!(decided[0]["decision_usage"], json!("temos_muito"));
    assert_eq!(decided[0]["decision_relevance"], json!("pode_gerar_muito_valor"));

    let detail_body = post(
        &base,
        "/m4-detalhamento",
        json!({"brand": "Loja Azul", "from_m3": {"decisions": [decided[0]]}}),
    )
    .await;
    let detailed = detail_body["detailed"].as_array().unwrap();
    assert_eq!(detailed[0]["differential"], json!("funcionais/conveniência"));
    assert_eq!(
        detail_body["gaps"][0]["missing"].as_array().unwrap().len(),
        7
    );

    let plan_body = post(
        &base,
        "/m5-planejamento",
        json!({"brand": "Loja Azul", "from_m4": {"detailed": detail_body["detailed"]}}),
    )
    .await;
    let plan = plan_body["plan"].as_array().unwrap();
    assert_eq!(plan[0]["differential"], json!("funcionais/conveniência"));
    assert_eq!(plan[0]["dizer"]["o_que"], json!(""));
    assert_eq!(plan[0]["mostrar"]["onde"], json!([]));
    assert_eq!(plan[0]["fazer"]["como"], json!(""));

    // Idempotence: re-running M5 on the same detailed list is byte-identical.
    let plan_again = post(
        &base,
        "/m5-planejamento",
        json!({"brand": "Loja Azul", "from_m4": {"detailed": detail_body["detailed"]}}),
    )
    .await;
    assert_eq!(plan_body, plan_again);
}
