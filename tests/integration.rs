//! End-to-end tests for the reskilling ROI calculator API.
//!
//! This test suite covers:
//! - The worked scenarios from the reference table
//! - Zero and floored headcounts
//! - Validation errors and their HTTP mapping
//! - Batch calculation
//! - Industry averages and reference data endpoints
//! - Loading reference data from file

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use reskilling_roi::api::{AppState, MAX_BATCH_SIZE, create_router};
use reskilling_roi::config::{ConfigLoader, ReferenceTable};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(ReferenceTable::embedded()))
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
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", body).await
}

fn create_request(
    total: impl Into<Value>,
    pct: impl Into<Value>,
    sector: &str,
    region: &str,
) -> Value {
    let total: Value = total.into();
    let pct: Value = pct.into();
    json!({
        "totalEmployees": total,
        "reskillingPercentage": pct,
        "sector": sector,
        "region": region
    })
}

fn assert_money(result: &Value, field: &str, expected: f64) {
    let actual = result["result"][field].as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-6,
        "Expected {} = {}, got {}",
        field,
        expected,
        actual
    );
}

fn assert_formatted(result: &Value, field: &str, expected: &str) {
    assert_eq!(
        result["formatted"][field].as_str().unwrap(),
        expected,
        "formatted {}",
        field
    );
}

fn assert_roi(result: &Value, expected: f64) {
    let actual = result["result"]["roiPercent"].as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected ROI {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Worked scenarios
// =============================================================================

#[tokio::test]
async fn test_banking_uk_1000_at_40_percent() {
    let (status, result) = post_calculate(create_request(1000, 40, "banking", "UK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 400);
    assert_money(&result, "costHiringExternally", 4_000_000.0);
    assert_money(&result, "costReskillingInternally", 2_000_000.0);
    assert_money(&result, "productivitySavings", 3_000_000.0);
    assert_money(&result, "retentionSavings", 2_400_000.0);
    assert_money(&result, "onboardingSavings", 2_000_000.0);
    assert_money(&result, "totalFinancialBenefits", 7_400_000.0);
    assert_money(&result, "netBenefit", 5_400_000.0);
    assert_roi(&result, 270.0);

    assert_eq!(result["currency"], "GBP");
    assert_formatted(&result, "costHiringExternally", "£4,000,000");
    assert_formatted(&result, "totalFinancialBenefits", "£7,400,000");
    assert_formatted(&result, "netBenefit", "£5,400,000");
    assert_formatted(&result, "roiPercent", "270.0%");
}

#[tokio::test]
async fn test_insurance_hk_500_at_25_percent() {
    let (status, result) = post_calculate(create_request(500, 25, "insurance", "HK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 125);
    assert_money(&result, "costHiringExternally", 8_750_000.0);
    assert_money(&result, "costReskillingInternally", 4_375_000.0);
    assert_money(&result, "productivitySavings", 6_250_000.0);
    assert_money(&result, "retentionSavings", 3_000_000.0);
    assert_money(&result, "onboardingSavings", 4_375_000.0);
    assert_money(&result, "totalFinancialBenefits", 13_625_000.0);
    assert_money(&result, "netBenefit", 9_250_000.0);
    assert_roi(&result, 9_250_000.0 / 4_375_000.0 * 100.0);

    assert_eq!(result["currency"], "HKD");
    assert_formatted(&result, "costReskillingInternally", "HK$4,375,000");
    assert_formatted(&result, "roiPercent", "211.4%");
}

#[tokio::test]
async fn test_law_australia_100_at_100_percent() {
    let (status, result) = post_calculate(create_request(100, 100, "law", "Australia")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 100);
    assert_money(&result, "costHiringExternally", 1_800_000.0);
    assert_money(&result, "costReskillingInternally", 1_000_000.0);
    assert_money(&result, "productivitySavings", 700_000.0);
    assert_money(&result, "retentionSavings", 720_000.0);
    assert_money(&result, "onboardingSavings", 800_000.0);
    assert_money(&result, "totalFinancialBenefits", 2_220_000.0);
    assert_money(&result, "netBenefit", 1_220_000.0);
    assert_roi(&result, 122.0);

    assert_eq!(result["currency"], "AUD");
    assert_eq!(result["input"]["region"], "Australia");
    assert_formatted(&result, "netBenefit", "AU$1,220,000");
    assert_formatted(&result, "roiPercent", "122.0%");
}

#[tokio::test]
async fn test_au_code_is_accepted_for_australia() {
    let (status, result) = post_calculate(create_request(100, 100, "law", "AU")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["input"]["region"], "Australia");
    assert_money(&result, "netBenefit", 1_220_000.0);
}

#[tokio::test]
async fn test_form_strings_give_same_result_as_numbers() {
    let (_, from_numbers) = post_calculate(create_request(1000, 40, "banking", "UK")).await;
    let (status, from_strings) =
        post_calculate(create_request("1000", "40", "banking", "UK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(from_numbers["result"], from_strings["result"]);
}

// =============================================================================
// SECTION 2: Zero and floored headcounts
// =============================================================================

#[tokio::test]
async fn test_zero_percent_gives_zero_and_undefined_roi() {
    let (status, result) = post_calculate(create_request(1000, 0, "banking", "UK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 0);
    for field in [
        "costHiringExternally",
        "costReskillingInternally",
        "productivitySavings",
        "retentionSavings",
        "onboardingSavings",
        "totalFinancialBenefits",
        "netBenefit",
    ] {
        assert_money(&result, field, 0.0);
    }
    assert!(result["result"]["roiPercent"].is_null());
    assert_formatted(&result, "roiPercent", "n/a");
    assert_formatted(&result, "netBenefit", "£0");
}

#[tokio::test]
async fn test_zero_employees_gives_undefined_roi() {
    let (status, result) = post_calculate(create_request(0, 50, "law", "HK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 0);
    assert!(result["result"]["roiPercent"].is_null());
}

#[tokio::test]
async fn test_headcount_is_floored_not_rounded() {
    let (status, result) = post_calculate(create_request(3, 40, "banking", "UK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["result"]["employeesToReskill"], 1);
    assert_money(&result, "costReskillingInternally", 5_000.0);
}

// =============================================================================
// SECTION 3: Validation errors
// =============================================================================

#[tokio::test]
async fn test_unknown_region_returns_400() {
    let (status, error) = post_calculate(create_request(1000, 40, "banking", "US")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNKNOWN_ENUM_MEMBER");
    assert!(error["message"].as_str().unwrap().contains("region"));
    assert!(error["message"].as_str().unwrap().contains("US"));
}

#[tokio::test]
async fn test_unknown_sector_returns_400() {
    let (status, error) = post_calculate(create_request(1000, 40, "Banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNKNOWN_ENUM_MEMBER");
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let (status, error) = post_calculate(json!({
        "reskillingPercentage": 40,
        "sector": "banking",
        "region": "UK"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_FIELD");
    assert!(error["message"].as_str().unwrap().contains("totalEmployees"));
}

#[tokio::test]
async fn test_empty_string_is_missing_field() {
    let (status, error) = post_calculate(create_request("", 40, "banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn test_non_numeric_string_returns_400() {
    let (status, error) = post_calculate(create_request(1000, "forty", "banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "NOT_A_NUMBER");
    assert!(error["message"].as_str().unwrap().contains("forty"));
}

#[tokio::test]
async fn test_percentage_above_100_returns_400() {
    let (status, error) = post_calculate(create_request(1000, 120, "banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OUT_OF_RANGE");
    assert!(error["message"].as_str().unwrap().contains("120"));
}

#[tokio::test]
async fn test_negative_headcount_returns_400() {
    let (status, error) = post_calculate(create_request(-10, 40, "banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn test_fractional_headcount_returns_400() {
    let (status, error) = post_calculate(create_request(10.5, 40, "banking", "UK")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn test_wrong_json_type_is_malformed() {
    let (status, error) = post_calculate(json!({
        "totalEmployees": [1000],
        "reskillingPercentage": 40,
        "sector": "banking",
        "region": "UK"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// SECTION 4: Batch calculation
// =============================================================================

#[tokio::test]
async fn test_batch_mixes_results_and_errors_in_order() {
    let body = json!({
        "inputs": [
            create_request(1000, 40, "banking", "UK"),
            create_request(1000, 40, "banking", "US"),
            create_request(500, 25, "insurance", "HK")
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate/batch", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["succeeded"], 2);
    assert_eq!(response["failed"], 1);

    let results = response["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["ok"]["result"]["employeesToReskill"], 400);
    assert_eq!(results[1]["error"]["code"], "UNKNOWN_ENUM_MEMBER");
    assert_eq!(results[2]["ok"]["result"]["employeesToReskill"], 125);
}

#[tokio::test]
async fn test_batch_too_large_returns_400() {
    let inputs: Vec<Value> = (0..=MAX_BATCH_SIZE)
        .map(|_| create_request(10, 10, "law", "UK"))
        .collect();

    let (status, error) = post_json(
        create_router_for_test(),
        "/calculate/batch",
        json!({ "inputs": inputs }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BATCH_TOO_LARGE");
}

// =============================================================================
// SECTION 5: Industry averages and reference data
// =============================================================================

#[tokio::test]
async fn test_assumptions_for_banking_uk() {
    let (status, response) = get_json(create_router_for_test(), "/assumptions/banking/UK").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["currency"], "GBP");
    assert_eq!(response["assumptions"]["averageSalary"], 50_000);
    assert_eq!(response["assumptions"]["costHiringExternally"], 10_000);
    assert_eq!(response["formatted"]["averageSalary"], "£50,000");
    assert_eq!(
        response["formatted"]["costHiringExternallyPerEmployee"],
        "£10,000"
    );
    assert_eq!(response["formatted"]["productivityUplift"], "15%");
}

#[tokio::test]
async fn test_assumptions_unknown_region_returns_400() {
    let (status, error) = get_json(create_router_for_test(), "/assumptions/law/US").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNKNOWN_ENUM_MEMBER");
}

#[tokio::test]
async fn test_reference_data_lists_every_cell() {
    let (status, response) = get_json(create_router_for_test(), "/reference-data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["version"], ReferenceTable::embedded().version());

    let entries = response["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0]["sector"], "banking");
    assert_eq!(entries[0]["region"], "UK");
    assert_eq!(entries[8]["sector"], "law");
    assert_eq!(entries[8]["region"], "Australia");
    assert_eq!(entries[8]["assumptions"]["averageSalary"], 100_000);
}

// =============================================================================
// SECTION 6: Reference data from file
// =============================================================================

#[tokio::test]
async fn test_router_over_loaded_file_matches_embedded() {
    let table = ConfigLoader::load("./config/reference_data.yaml")
        .expect("Failed to load reference data")
        .into_table();
    let router = create_router(AppState::new(table));

    let (status, result) = post_json(
        router,
        "/calculate",
        create_request(1000, 40, "banking", "UK"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result, "netBenefit", 5_400_000.0);
    assert_eq!(
        result["referenceDataVersion"],
        ReferenceTable::embedded().version()
    );
}
