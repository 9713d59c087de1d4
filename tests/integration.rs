//! Integration tests for the payroll HTTP API.
//!
//! This test suite drives the router end to end:
//! - Payroll breakdowns for every pay period
//! - Income tax and bracket lookup
//! - NIS, NHT, Education Tax and HEART/NTA endpoints
//! - Rate table inspection
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

use jamaica_payroll::api::{AppState, create_router};
use jamaica_payroll::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let path = format!("{}/config/jamaica_2024.yaml", env!("CARGO_MANIFEST_DIR"));
    let config = ConfigLoader::load(path).expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(value: &Value) -> Decimal {
    let text = value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {}", value));
    Decimal::from_str(text).unwrap()
}

fn assert_decimal(value: &Value, expected: &str) {
    assert_eq!(
        decimal(value).normalize(),
        Decimal::from_str(expected).unwrap().normalize(),
        "Expected {}, got {}",
        expected,
        value
    );
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

// =============================================================================
// SECTION 1: Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_monthly_150k() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/payroll",
        json!({ "gross_pay": 150000, "period": "monthly" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &result["breakdown"];
    assert_eq!(breakdown["period"], "monthly");
    assert_decimal(&breakdown["annualized"], "1800000");
    assert_decimal(&breakdown["income_tax"], "6248");
    assert_decimal(&breakdown["total_deductions"], "17123");
    assert_decimal(&breakdown["net_pay"], "132877");
    assert_decimal(&breakdown["total_cost_to_employer"], "168750");

    let reconciled = decimal(&breakdown["net_pay"]) + decimal(&breakdown["total_deductions"]);
    assert_eq!(reconciled, Decimal::from(150000));
}

#[tokio::test]
async fn test_payroll_defaults_to_monthly() {
    let router = create_router_for_test();
    let (status, result) = post_json(router, "/payroll", json!({ "gross_pay": "150000" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown"]["period"], "monthly");
    assert_decimal(&result["breakdown"]["annualized"], "1800000");
}

#[tokio::test]
async fn test_payroll_annual_is_not_scaled() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/payroll",
        json!({ "gross_pay": 2400000, "period": "annual" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["breakdown"]["gross_pay"], "2400000");
    assert_decimal(&result["breakdown"]["annualized"], "2400000");
}

#[tokio::test]
async fn test_payroll_weekly_and_fortnightly_reconcile() {
    for (gross, period) in [("45678.91", "weekly"), ("98765.43", "fortnightly")] {
        let router = create_router_for_test();
        let (status, result) = post_json(
            router,
            "/payroll",
            json!({ "gross_pay": gross, "period": period }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let breakdown = &result["breakdown"];
        assert_eq!(
            decimal(&breakdown["net_pay"]) + decimal(&breakdown["total_deductions"]),
            Decimal::from_str(gross).unwrap()
        );
        assert_eq!(
            decimal(&breakdown["gross_pay"]) + decimal(&breakdown["total_employer_contributions"]),
            decimal(&breakdown["total_cost_to_employer"])
        );
    }
}

#[tokio::test]
async fn test_payroll_response_envelope_fields() {
    let router = create_router_for_test();
    let (status, result) = post_json(router, "/payroll", json!({ "gross_pay": 100000 })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(result["tax_year"], 2024);

    let steps = result["breakdown"]["audit_trace"].as_array().unwrap();
    assert_eq!(steps.len(), 8);
    assert_eq!(steps[0]["rule_id"], "annualization");
    assert_eq!(steps[1]["basis"], "annualized");
}

// =============================================================================
// SECTION 2: Income Tax
// =============================================================================

#[tokio::test]
async fn test_income_tax_three_million() {
    let router = create_router_for_test();
    let (status, result) =
        post_json(router, "/income-tax", json!({ "annual_income": 3000000 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["taxable_income"], "1499904");
    assert_decimal(&result["tax"], "374976.00");
    assert_eq!(result["brackets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_income_tax_at_threshold() {
    let router = create_router_for_test();
    let (status, result) =
        post_json(router, "/income-tax", json!({ "annual_income": "1500096" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["tax"], "0");
    assert_decimal(&result["taxable_income"], "0");
}

#[tokio::test]
async fn test_brackets_endpoint_lists_schedule() {
    let router = create_router_for_test();
    let (status, result) = get_json(router, "/income-tax/brackets").await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["threshold"], "1500096");
    let brackets = result["brackets"].as_array().unwrap();
    assert_eq!(brackets.len(), 3);
    assert!(brackets[2]["max"].is_null());
    assert_decimal(&brackets[1]["max"], "7500096");
}

// =============================================================================
// SECTION 3: Contributions
// =============================================================================

#[tokio::test]
async fn test_nis_at_ceiling() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/nis",
        json!({ "annual_gross": 6000000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["at_ceiling"], true);
    assert_decimal(&result["employee"], "150000");
}

#[tokio::test]
async fn test_nht_and_education_tax() {
    let (status, nht) = post_json(
        create_router_for_test(),
        "/contributions/nht",
        json!({ "period_gross": 150000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&nht["employee"], "3000");
    assert_decimal(&nht["employer"], "4500");

    let (status, education) = post_json(
        create_router_for_test(),
        "/contributions/education-tax",
        json!({ "period_gross": 150000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&education["employee"], "3375");
    assert_decimal(&education["total"], "8625");
}

#[tokio::test]
async fn test_heart_levy() {
    let router = create_router_for_test();
    let (status, result) = post_json(
        router,
        "/contributions/heart",
        json!({ "period_gross": 150000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["employer"], "4500");
}

#[tokio::test]
async fn test_rates_endpoint_reports_period_limits() {
    let router = create_router_for_test();
    let (status, result) = get_json(router, "/rates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["rates"]["tax_year"], 2024);
    let limits = result["period_limits"].as_array().unwrap();
    let monthly = limits
        .iter()
        .find(|limits| limits["period"] == "monthly")
        .unwrap();
    assert_decimal(&monthly["income_tax_threshold"], "125008");
}

// =============================================================================
// SECTION 4: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_negative_gross_pay() {
    let router = create_router_for_test();
    let (status, error) = post_json(router, "/payroll", json!({ "gross_pay": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("gross_pay"));
}

#[tokio::test]
async fn test_error_unknown_period() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/payroll",
        json!({ "gross_pay": 1000, "period": "daily" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["details"].as_str().unwrap().contains("daily"));
}

#[tokio::test]
async fn test_error_gross_pay_too_large_to_annualize() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/payroll",
        json!({ "gross_pay": "10000000000000000000000000000", "period": "weekly" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["details"].as_str().unwrap().contains("supported range"));
}

#[tokio::test]
async fn test_error_negative_contribution_base() {
    let router = create_router_for_test();
    let (status, error) = post_json(
        router,
        "/contributions/nht",
        json!({ "period_gross": "-0.01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_error_missing_field() {
    let router = create_router_for_test();
    let (status, error) = post_json(router, "/income-tax", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();
    let request = Request::builder()
        .method("POST")
        .uri("/payroll")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, error) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}
