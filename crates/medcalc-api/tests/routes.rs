use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    medcalc_api::app().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn rox_params() -> Value {
    json!({"spo2": 95, "fio2": 0.4, "respiratory_rate": 20})
}

#[tokio::test]
async fn health_reports_calculator_count() {
    let response = send(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "medcalc-api");
    assert_eq!(body["calculators"], 44);
}

#[tokio::test]
async fn list_scores_returns_summaries() {
    let body = json_body(send(Method::GET, "/api/scores", None).await).await;
    assert_eq!(body["total"], 44);
    let first = &body["scores"][0];
    assert!(first.get("title").is_some());
    assert!(first.get("parameters").is_none());
}

#[tokio::test]
async fn list_scores_filters_by_category() {
    let body = json_body(send(Method::GET, "/api/scores?category=pediatrics", None).await).await;
    assert_eq!(body["total"], 3);

    let unknown = json_body(send(Method::GET, "/api/scores?category=podiatry", None).await).await;
    assert_eq!(unknown["total"], 0);
}

#[tokio::test]
async fn search_takes_precedence_over_category() {
    let body = json_body(
        send(Method::GET, "/api/scores?category=pediatrics&search=rox", None).await,
    )
    .await;
    let ids: Vec<&str> = body["scores"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert!(ids.contains(&"rox_index"));
}

#[tokio::test]
async fn score_metadata_includes_parameters() {
    let response = send(Method::GET, "/api/scores/rox_index", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], "rox_index");
    assert_eq!(body["parameters"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn unknown_score_metadata_is_404() {
    let response = send(Method::GET, "/api/scores/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "ScoreNotFound");
    assert_eq!(body["details"]["score_id"], "nope");
}

#[tokio::test]
async fn validate_reports_ready() {
    let body = json_body(send(Method::GET, "/api/scores/cas/validate", None).await).await;
    assert_eq!(
        body,
        json!({
            "score_id": "cas",
            "score_exists": true,
            "calculator_available": true,
            "status": "ready",
        })
    );

    let missing = send(Method::GET, "/api/scores/nope/validate", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_are_listed() {
    let body = json_body(send(Method::GET, "/api/categories", None).await).await;
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(body["total"], categories.len());
    assert!(categories.contains(&json!("emergency")));
}

#[tokio::test]
async fn generic_calculate_returns_envelope() {
    let response = send(Method::POST, "/api/rox_index/calculate", Some(rox_params())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    for field in ["result", "unit", "interpretation", "stage", "stage_description"] {
        assert!(body.get(field).is_some(), "missing {field}");
    }
}

#[tokio::test]
async fn named_route_matches_generic_route() {
    let named = json_body(send(Method::POST, "/rox_index", Some(rox_params())).await).await;
    let generic =
        json_body(send(Method::POST, "/api/rox_index/calculate", Some(rox_params())).await).await;
    assert_eq!(named, generic);
}

#[tokio::test]
async fn calculate_unknown_score_is_404() {
    let response = send(Method::POST, "/api/nope/calculate", Some(json!({}))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_parameters_are_422_with_details() {
    let response = send(
        Method::POST,
        "/api/rox_index/calculate",
        Some(json!({"spo2": 95, "fio2": 5.0})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["error"], "ValidationError");
    let errors = body["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["parameter"], "fio2");
    assert_eq!(errors[1]["parameter"], "respiratory_rate");
}

#[tokio::test]
async fn cross_field_failure_is_422() {
    let response = send(
        Method::POST,
        "/ctcae",
        Some(json!({"adverse_event_type": "anemia", "patient_sex": "male"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["details"]["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_422() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/rox_index/calculate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = medcalc_api::app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let response = send(Method::GET, "/does/not/exist", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn blood_loss_with_rising_hemoglobin_is_422() {
    let response = send(
        Method::POST,
        "/maximum_allowable_blood_loss_without_transfusion",
        Some(json!({
            "age_group": "adult_man",
            "body_weight": 70,
            "initial_hemoglobin": 10.0,
            "final_hemoglobin": 10.0,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "ValidationError");
    assert!(body["details"]["error"].is_string());
}
