//! Static analytics payloads for the /api/ai/* endpoints.
//!
//! These are configuration constants, not computed analytics; the payload
//! shapes come from the upstream business dataset.

use axum::Json;
use once_cell::sync::Lazy;
use serde_json::{Value, json};

static BASKET_ANALYSIS: Lazy<Value> = Lazy::new(|| {
    json!({
        "analysis_type": "product_association_mining",
        "description": "AI-powered product association analysis",
        "associations": [
            {
                "product_1": "Electronics",
                "product_2": "Home Goods",
                "co_occurrence_count": 8,
                "association_strength": "high",
                "insight": "Customers who buy Electronics often buy Home Goods",
                "business_opportunity": "Bundle Electronics with Home Goods for cross-selling"
            },
            {
                "product_1": "Groceries",
                "product_2": "Home Goods",
                "co_occurrence_count": 7,
                "association_strength": "high",
                "insight": "Customers who buy Groceries often buy Home Goods",
                "business_opportunity": "Bundle Groceries with Home Goods for cross-selling"
            }
        ]
    })
});

static CUSTOMER_SEGMENTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "analysis_type": "customer_segmentation",
        "description": "AI-powered customer segmentation analysis",
        "segments": [
            {
                "segment": "Premium",
                "customers": 300,
                "avg_spend": 1200,
                "characteristics": "High-value, frequent buyers"
            },
            {
                "segment": "Standard",
                "customers": 500,
                "avg_spend": 650,
                "characteristics": "Regular customers, moderate spending"
            },
            {
                "segment": "Budget",
                "customers": 200,
                "avg_spend": 350,
                "characteristics": "Price-sensitive, occasional buyers"
            }
        ]
    })
});

static STRATEGIC_INSIGHTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "analysis_type": "business_insights",
        "description": "AI-powered strategic business insights",
        "insights": {
            "total_customers": 1000,
            "top_category": "Groceries",
            "avg_transaction_value": 831.06,
            "recommendations": [
                "Focus on cross-selling identified product pairs",
                "Create bundled offers for frequently paired categories",
                "Target premium segment with personalized offers"
            ]
        }
    })
});

/// GET /api/ai/basket-analysis
pub async fn basket_analysis() -> Json<Value> {
    Json(BASKET_ANALYSIS.clone())
}

/// GET /api/ai/customer-segments
pub async fn customer_segments() -> Json<Value> {
    Json(CUSTOMER_SEGMENTS.clone())
}

/// GET /api/ai/insights
pub async fn strategic_insights() -> Json<Value> {
    Json(STRATEGIC_INSIGHTS.clone())
}
