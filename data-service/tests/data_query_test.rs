//! /api/data filtering and limiting integration tests.

mod common;

use common::{PREMIUM_KEY, TestApp};
use serde_json::{Value, json};

async fn query(app: &TestApp, query_string: &str) -> Value {
    let response = app
        .get(&format!("/api/data{}", query_string), Some(PREMIUM_KEY))
        .await;
    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?category=ELECTRONICS").await;
    assert_eq!(body["count"], 2);
    for record in body["data"].as_array().unwrap() {
        let category = record["Product_Category"].as_str().unwrap();
        assert!(category.eq_ignore_ascii_case("electronics"));
    }
}

#[tokio::test]
async fn min_rating_filters_inclusive() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?min_rating=4").await;
    assert_eq!(body["count"], 3);
    for record in body["data"].as_array().unwrap() {
        let rating: i64 = record["Feedback_Rating_1_5"].as_str().unwrap().parse().unwrap();
        assert!(rating >= 4);
    }
}

#[tokio::test]
async fn non_numeric_min_rating_is_ignored() {
    let app = TestApp::spawn().await;

    let filtered = query(&app, "?min_rating=abc").await;
    let unfiltered = query(&app, "").await;
    assert_eq!(filtered, unfiltered);
    assert_eq!(filtered["count"], 5);
}

#[tokio::test]
async fn limit_truncates_in_store_order() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?limit=2").await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["Transaction_ID"], "T-1001");
    assert_eq!(body["data"][1]["Transaction_ID"], "T-1002");
}

#[tokio::test]
async fn limit_beyond_matches_returns_all_matches() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?category=Groceries&limit=50").await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn invalid_limit_falls_back_to_default() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?limit=lots").await;
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn filters_compose() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?category=groceries&min_rating=5").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["Transaction_ID"], "T-1005");
}

#[tokio::test]
async fn unparseable_stored_rating_counts_as_zero() {
    let csv = "\
Transaction_ID,Product_Category,Total_Value_USD,Feedback_Rating_1_5
T-1,Electronics,10.00,5
T-2,Electronics,20.00,N/A
";
    let app = TestApp::spawn_with_csv(csv).await;

    let body = query(&app, "?min_rating=1").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["Transaction_ID"], "T-1");
}

#[tokio::test]
async fn fixture_round_trips_field_for_field() {
    let app = TestApp::spawn().await;

    let body = query(&app, "?limit=100").await;
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["data"][0],
        json!({
            "Transaction_ID": "T-1001",
            "Product_Category": "Electronics",
            "Total_Value_USD": "1200.50",
            "Feedback_Rating_1_5": "5",
        })
    );
    assert_eq!(
        body["data"][4],
        json!({
            "Transaction_ID": "T-1005",
            "Product_Category": "Groceries",
            "Total_Value_USD": "22.10",
            "Feedback_Rating_1_5": "5",
        })
    );
}

#[tokio::test]
async fn empty_store_reports_unavailable() {
    let app = TestApp::spawn_without_data().await;

    let response = app.get("/api/data", Some(PREMIUM_KEY)).await;
    assert_eq!(response.status(), 503);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "No data available"}));
}
