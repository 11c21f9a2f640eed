/// API tests for the company insight backend.
///
/// The router runs against an in-process cache store and a scripted
/// analytics origin, so no network or Redis is needed.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tower::ServiceExt;

use company_insight::app::create_app;
use company_insight::external::analytics_provider::{AnalyticsOrigin, OriginError};
use company_insight::services::cache_gateway::CacheGateway;
use company_insight::services::cache_store::MemoryStore;
use company_insight::state::AppState;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ScriptedOrigin {
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
    payloads: HashMap<String, Value>,
    rejections: Mutex<Vec<u16>>,
}

impl ScriptedOrigin {
    fn with_payload(mut self, name: &str, payload: Value) -> Self {
        self.payloads.insert(name.to_string(), payload);
        self
    }

    fn reject_next(&self, status: u16) {
        self.rejections.lock().push(status);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalyticsOrigin for ScriptedOrigin {
    async fn fetch_company_data(&self, company_name: &str) -> Result<Value, OriginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(company_name.to_string());

        if let Some(status) = self.rejections.lock().pop() {
            return Err(OriginError::Rejected {
                status,
                reason: "scripted".to_string(),
            });
        }

        Ok(self
            .payloads
            .get(company_name)
            .cloned()
            .unwrap_or_else(|| json!({ "company_name": company_name })))
    }
}

fn apple_payload() -> Value {
    json!({
        "company_name": "Apple Inc.",
        "past_dates": ["2024-01-01", "2024-01-02"],
        "past_closings": [100, 120],
        "closing_timestamps": ["2024-01-03"],
        "future_closings": [110],
        "overall_sentiment": 0.3,
        "titles": ["a", "b"],
        "links": ["https://www.example.com/a", "https://news.example.org/b"],
        "dates": ["2024-01-01", "2024-01-02"],
        "sentiments": [-0.4],
        "fundamentals": {"Resolved_Symbol": "AAPL", "dividend_yield": 0.0044},
    })
}

fn app(origin: Arc<ScriptedOrigin>) -> Router {
    let gateway = CacheGateway::new(
        Arc::new(MemoryStore::new()),
        origin,
        Duration::from_secs(60),
    );
    create_app(AppState { gateway }, None)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, body)
}

fn post_company_data(name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/company-data")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "companyName": name }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// POST /api/company-data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_company_data_is_cached_after_first_lookup() {
    let origin = Arc::new(ScriptedOrigin::default().with_payload("Apple Inc.", apple_payload()));
    let app = app(origin.clone());

    let (status, first) = send(&app, post_company_data("Apple Inc.")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["source"], "origin");

    let (status, second) = send(&app, post_company_data("Apple Inc.")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["source"], "cache");
    assert_eq!(first["data"], second["data"]);

    assert_eq!(origin.calls(), 1);
}

#[tokio::test]
async fn test_origin_rejection_keeps_status_and_is_not_cached() {
    let origin = Arc::new(ScriptedOrigin::default());
    origin.reject_next(404);
    let app = app(origin.clone());

    let (status, body) = send(&app, post_company_data("Nope Corp")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Failed to fetch from backend");

    let (status, body) = send(&app, post_company_data("Nope Corp")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "origin");
    assert_eq!(origin.calls(), 2);
}

#[tokio::test]
async fn test_blank_company_name_is_rejected() {
    let origin = Arc::new(ScriptedOrigin::default());
    let app = app(origin.clone());

    let (status, body) = send(&app, post_company_data("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "companyName is required");
    assert_eq!(origin.calls(), 0);
}

// ---------------------------------------------------------------------------
// Catalog and dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_company_catalog() {
    let app = app(Arc::new(ScriptedOrigin::default()));

    let (status, body) = send(&app, get("/api/companies")).await;

    assert_eq!(status, StatusCode::OK);
    let companies = body.as_array().unwrap();
    assert!(companies.len() > 80);
    assert!(companies
        .iter()
        .any(|c| c["symbol"] == "AAPL" && c["name"] == "Apple Inc."));
}

#[tokio::test]
async fn test_dashboard_by_symbol_uses_company_name_as_key() {
    let origin = Arc::new(ScriptedOrigin::default().with_payload("Apple Inc.", apple_payload()));
    let app = app(origin.clone());

    let (status, body) = send(&app, get("/api/companies/aapl/dashboard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin.requested.lock().as_slice(), ["Apple Inc.".to_string()]);

    let samples = body["chart"]["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[2]["forecastValue"], 110.0);
    assert_eq!(body["chart"]["lastForecast"], 110.0);

    let range = body["chart"]["range"].as_array().unwrap();
    assert!((range[0].as_f64().unwrap() - 98.4).abs() < 1e-9);
    assert!((range[1].as_f64().unwrap() - 121.6).abs() < 1e-9);

    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0]["label"], "Negative");
    assert_eq!(articles[1]["sentiment"], 0.3);
    assert_eq!(articles[1]["label"], "Positive");
    assert_eq!(articles[0]["host"], "example.com");

    assert_eq!(body["sentimentLabel"], "Positive");
    assert_eq!(body["fundamentals"]["symbol"], "AAPL");
    let dividend_yield = body["fundamentals"]["stats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["label"] == "Dividend Yield")
        .unwrap();
    assert_eq!(dividend_yield["value"], "0.44%");
}

#[tokio::test]
async fn test_unknown_symbol_is_not_found() {
    let origin = Arc::new(ScriptedOrigin::default());
    let app = app(origin.clone());

    let (status, _) = send(&app, get("/api/companies/ZZZZ/dashboard")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(origin.calls(), 0);
}

#[tokio::test]
async fn test_dashboard_without_chart_data() {
    let app = app(Arc::new(ScriptedOrigin::default()));

    let (status, body) = send(&app, get("/api/dashboard?company=Empty%20Co")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "Empty Co");
    assert_eq!(body["chart"]["samples"], json!([]));
    assert_eq!(body["chart"]["range"], json!([0.0, "auto"]));
    assert_eq!(body["chart"]["lastForecast"], Value::Null);
    assert_eq!(body["fundamentals"], Value::Null);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_endpoints() {
    let app = app(Arc::new(ScriptedOrigin::default()));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = send(&app, get("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cache_store"], true);
    assert_eq!(body["cache_ttl_secs"], 60);
}
