//! Integration tests for the BMI calculator endpoints

mod common;

use axum::http::StatusCode;
use bmi_calculator_backend::config::AppConfig;
use rstest::rstest;

#[tokio::test]
async fn test_calculate_metric_normal() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"weight_value": 70, "height_value": 175}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    assert_eq!(json["bmi"], 22.9);
    assert_eq!(json["category"], "normal");
    assert_eq!(json["category_label"], "Normal");
    assert_eq!(json["healthy_min_kg"], 56.7);
    assert_eq!(json["healthy_max_kg"], 76.6);
    assert_eq!(json["target_kg"], 66.6);
    assert_eq!(json["delta"]["position"], "within_range");
    assert_eq!(json["display"]["healthy_range"], "56.7 - 76.6 kg");
    assert_eq!(
        json["delta_message"],
        "Your weight is within the healthy range. You are 3.4 kg from the target weight of 66.6 kg."
    );
}

#[tokio::test]
async fn test_calculate_imperial_units() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/bmi",
            r#"{"weight_value": 154.324, "weight_unit": "lb", "height_value": 68.9, "height_unit": "in"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    assert_eq!(json["bmi"], 22.9);
    assert_eq!(json["category"], "normal");
}

#[tokio::test]
async fn test_calculate_underweight_message() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"weight_value": 45, "height_value": 160}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    assert_eq!(json["category"], "underweight");
    assert_eq!(json["delta"]["position"], "below_range");
    assert_eq!(json["delta"]["kg"], 2.4);
    assert!(json["delta_message"]
        .as_str()
        .unwrap()
        .starts_with("You are 2.4 kg below the healthy range."));
}

#[rstest]
#[case(45.0, 160.0, "underweight")]
#[case(70.0, 175.0, "normal")]
#[case(76.5, 175.0, "overweight")]
#[case(92.5, 175.0, "obese")]
#[tokio::test]
async fn test_category_per_scenario(
    #[case] weight: f64,
    #[case] height: f64,
    #[case] expected: &str,
) {
    let app = common::TestApp::new();
    let body = format!(r#"{{"weight_value": {weight}, "height_value": {height}}}"#);

    let (status, body) = app.post("/api/v1/bmi", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json(&body)["category"], expected);
}

#[tokio::test]
async fn test_calculate_honors_configured_decimals() {
    let mut config = AppConfig::default();
    config.calculator.display_decimals = 2;
    let app = common::TestApp::with_config(config);

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"weight_value": 70, "height_value": 175}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    assert_eq!(json["bmi"], 22.86);
    assert_eq!(json["target_kg"], 66.61);
}

#[tokio::test]
async fn test_calculate_rejects_missing_height() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"weight_value": 70, "height_value": 0}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = common::json(&body);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "height_value");
    assert_eq!(json["error"]["message"], "Height: Enter your height.");
}

#[tokio::test]
async fn test_calculate_rejects_unknown_unit() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/bmi",
            r#"{"weight_value": 11, "weight_unit": "stone", "height_value": 175}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::json(&body)["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_calculate_rejects_malformed_json() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/bmi", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::json(&body)["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_categories_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/bmi/categories").await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    let bands = json.as_array().unwrap();
    assert_eq!(bands.len(), 4);
    assert_eq!(bands[0]["category"], "underweight");
    assert!(bands[0]["min_bmi"].is_null());
    assert_eq!(bands[1]["min_bmi"], 18.5);
    assert_eq!(bands[3]["category"], "obese");
    assert!(bands[3]["max_bmi"].is_null());
}

#[tokio::test]
async fn test_healthy_range_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1/bmi/healthy-range?height=160").await;

    assert_eq!(status, StatusCode::OK);
    let json = common::json(&body);
    assert_eq!(json["height_cm"], 160.0);
    assert_eq!(json["min_kg"], 47.4);
    assert_eq!(json["max_kg"], 64.0);
    assert_eq!(json["target_kg"], 55.7);
}

#[tokio::test]
async fn test_healthy_range_rejects_bad_query() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/api/v1/bmi/healthy-range?height=tall").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/v1/bmi/healthy-range?height=20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::json(&body)["error"]["field"], "height");
}
