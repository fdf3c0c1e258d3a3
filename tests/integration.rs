//! Integration tests for the care payments engine.
//!
//! This test suite covers the payment scenarios end to end through the HTTP API:
//! - Empty input
//! - Quick-service flat fees (cash and electronic)
//! - Private-care hourly shares under both commission regimes
//! - Medical-supply exclusion
//! - Paid-entry filtering
//! - Multi-worker summaries
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use care_payments::api::{AppState, create_router};
use care_payments::config::{CommissionConfig, ConfigLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/payments.yaml").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn create_router_with_fraction(fraction: &str) -> Router {
    let config = ConfigLoader::from_config(CommissionConfig {
        private_care_commission_fraction: decimal(fraction),
        ..CommissionConfig::default()
    })
    .expect("Invalid config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a serialized Decimal field from a JSON body.
fn amount(value: &Value) -> Decimal {
    decimal(value.as_str().expect("amount should be a string"))
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn quick_entry(id: &str, worker_id: &str, hours: &str, method: &str) -> Value {
    json!({
        "id": id,
        "worker_id": worker_id,
        "request_id": format!("req_{}", id),
        "hours": hours,
        "is_paid": false,
        "service_types": ["blood_test"],
        "payment_method": method,
        "logged_on": "2026-03-02"
    })
}

fn private_entry(id: &str, worker_id: &str, price: &str, hours: &str) -> Value {
    json!({
        "id": id,
        "worker_id": worker_id,
        "request_id": format!("req_{}", id),
        "hours": hours,
        "is_paid": false,
        "service_types": ["full_time", "normal"],
        "price": price,
        "logged_on": "2026-03-02"
    })
}

async fn calculate(router: Router, entries: Vec<Value>) -> (StatusCode, Value) {
    post(
        router,
        "/payments/calculate",
        json!({ "worker_id": "nurse_01", "entries": entries }),
    )
    .await
}

// =============================================================================
// Calculation Scenarios
// =============================================================================

#[tokio::test]
async fn test_empty_entries_return_zero_totals() {
    let (status, body) = calculate(create_router_for_test(), vec![]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), Decimal::ZERO);
    assert_eq!(amount(&body["summary"]["amount_owed_by_worker"]), Decimal::ZERO);
    assert_eq!(amount(&body["summary"]["net_amount"]), Decimal::ZERO);
    assert_eq!(body["direction"], "settled");
}

#[tokio::test]
async fn test_cash_quick_service_plus_private_care() {
    let entries = vec![
        quick_entry("q1", "nurse_01", "2", "cash"),
        private_entry("p1", "nurse_01", "10", "3"),
    ];
    let (status, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["summary"]["amount_owed_by_worker"]), decimal("3.00"));
    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), decimal("24.00"));
    assert_eq!(amount(&body["summary"]["net_amount"]), decimal("21.00"));
    assert_eq!(amount(&body["unpaid_hours"]), decimal("5"));
    assert_eq!(body["contributions"][0]["kind"], "flat_fee_owed_by_worker");
    assert_eq!(body["contributions"][1]["kind"], "hourly_share_owed_to_worker");
}

#[tokio::test]
async fn test_private_care_twenty_percent_commission() {
    let entries = vec![private_entry("p1", "nurse_01", "12", "4")];
    let (_, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), decimal("38.4"));
    assert_eq!(amount(&body["summary"]["amount_owed_by_worker"]), Decimal::ZERO);
    assert_eq!(
        body["audit_trace"]["steps"][0]["rule_id"],
        "private_care_hourly_share"
    );
}

#[tokio::test]
async fn test_private_care_ten_percent_regime() {
    let entries = vec![private_entry("p1", "nurse_01", "12", "4")];
    let (_, body) = calculate(create_router_with_fraction("0.10"), entries).await;

    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), decimal("43.2"));
    assert_eq!(
        amount(&body["commission"]["private_care_commission_fraction"]),
        decimal("0.10")
    );
}

#[tokio::test]
async fn test_electronic_quick_service_owed_to_worker_regardless_of_hours() {
    let entries = vec![
        quick_entry("q1", "nurse_01", "0.5", "electronic"),
        quick_entry("q2", "nurse_01", "6", "electronic"),
    ];
    let (_, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), decimal("6.00"));
    assert_eq!(amount(&body["summary"]["amount_owed_by_worker"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_medical_equipment_entry_contributes_nothing() {
    let entries = vec![json!({
        "id": "m1",
        "worker_id": "nurse_01",
        "hours": "5",
        "price": "50",
        "service_types": ["medical_equipment"],
        "payment_method": "cash"
    })];
    let (_, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), Decimal::ZERO);
    assert_eq!(amount(&body["summary"]["amount_owed_by_worker"]), Decimal::ZERO);
    assert_eq!(amount(&body["summary"]["net_amount"]), Decimal::ZERO);
    assert_eq!(body["contributions"][0]["kind"], "skipped_medical_supply");
}

#[tokio::test]
async fn test_paid_entries_have_no_effect() {
    let mut paid = private_entry("p_paid", "nurse_01", "30", "8");
    paid["is_paid"] = json!(true);
    let unpaid = private_entry("p1", "nurse_01", "10", "3");

    let (_, with_paid) = calculate(create_router_for_test(), vec![paid, unpaid.clone()]).await;
    let (_, without_paid) = calculate(create_router_for_test(), vec![unpaid]).await;

    assert_eq!(with_paid["summary"], without_paid["summary"]);
    assert_eq!(with_paid["unpaid_hours"], without_paid["unpaid_hours"]);
}

#[tokio::test]
async fn test_untagged_entry_is_reported_as_warning() {
    let entries = vec![json!({
        "id": "x1",
        "worker_id": "nurse_01",
        "hours": "3",
        "price": "10"
    })];
    let (status, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["summary"]["net_amount"]), Decimal::ZERO);
    assert_eq!(body["audit_trace"]["warnings"][0]["code"], "MALFORMED_ENTRY");
}

#[tokio::test]
async fn test_entry_order_does_not_change_totals() {
    let a = quick_entry("q1", "nurse_01", "1", "cash");
    let b = private_entry("p1", "nurse_01", "17.35", "7.25");
    let c = quick_entry("q2", "nurse_01", "1", "electronic");

    let (_, forward) =
        calculate(create_router_for_test(), vec![a.clone(), b.clone(), c.clone()]).await;
    let (_, reversed) = calculate(create_router_for_test(), vec![c, b, a]).await;

    assert_eq!(
        amount(&forward["summary"]["net_amount"]),
        amount(&reversed["summary"]["net_amount"])
    );
}

// =============================================================================
// Multi-worker Summary
// =============================================================================

#[tokio::test]
async fn test_summary_across_workers() {
    let entries = vec![
        quick_entry("q1", "nurse_02", "1", "cash"),
        quick_entry("q2", "nurse_02", "1", "cash"),
        private_entry("p1", "nurse_01", "10", "3"),
        quick_entry("q3", "nurse_01", "2", "cash"),
    ];
    let (status, body) = post(
        create_router_for_test(),
        "/payments/summary",
        json!({ "entries": entries }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let workers = body["workers"].as_array().unwrap();
    assert_eq!(workers.len(), 2);

    assert_eq!(workers[0]["worker_id"], "nurse_01");
    assert_eq!(amount(&workers[0]["summary"]["net_amount"]), decimal("21.00"));
    assert_eq!(workers[0]["direction"], "platform_owes_worker");

    assert_eq!(workers[1]["worker_id"], "nurse_02");
    assert_eq!(amount(&workers[1]["summary"]["net_amount"]), decimal("-6.00"));
    assert_eq!(workers[1]["direction"], "worker_owes_platform");
    assert_eq!(amount(&workers[1]["unpaid_hours"]), decimal("2"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_unknown_service_type_is_rejected() {
    let entries = vec![json!({
        "id": "u1",
        "worker_id": "nurse_01",
        "hours": "1",
        "service_types": ["aromatherapy"]
    })];
    let (status, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let entries = vec![private_entry("p_neg", "nurse_01", "-10", "2")];
    let (status, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ENTRY");
}

#[tokio::test]
async fn test_overflowing_amount_is_rejected_on_both_endpoints() {
    let huge = private_entry("p_huge", "nurse_01", "79228162514264337593543950", "1000000");

    let (status, body) = calculate(create_router_for_test(), vec![huge.clone()]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ENTRY");
    assert!(body["message"].as_str().unwrap().contains("p_huge"));

    let (status, body) = post(
        create_router_for_test(),
        "/payments/summary",
        json!({ "entries": [huge] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ENTRY");
}

#[tokio::test]
async fn test_large_totals_saturate_across_entries() {
    let entries = vec![
        private_entry("big1", "nurse_01", "79228162514264337593543950", "1000"),
        private_entry("big2", "nurse_01", "79228162514264337593543950", "1000"),
    ];
    let (status, body) = calculate(create_router_for_test(), entries).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["summary"]["amount_owed_to_worker"]), Decimal::MAX);
    assert_eq!(amount(&body["summary"]["net_amount"]), Decimal::MAX);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payments/calculate")
                .body(Body::from(json!({ "worker_id": "n" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}
