//! HTTP integration tests for the Q&A router.
//!
//! Drives the Axum router in-process with `oneshot`; the catalog comes from
//! a `StaticSource` so reload behaviour is deterministic.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use product_qa::{EngineConfig, ProductQa, ProductRow, StaticSource, SynonymTable};
use serde_json::{json, Value};
use server_core::server::build_app;
use tower::ServiceExt;

fn catalog_rows() -> Vec<ProductRow> {
    vec![
        ProductRow::new("Vogue Walker")
            .with_handle("vogue-walker")
            .with_body_html("<p>Lightweight rollator with seat.</p>")
            .with_weight(6200.0, "g"),
        ProductRow::new("Inogen One G5")
            .with_handle("inogen-one-g5")
            .with_body_html("<p>Battery life: up to 6.5 hours with the single battery.</p>"),
    ]
}

async fn app_with(source: Arc<StaticSource>) -> (Router, Arc<ProductQa>) {
    let engine = Arc::new(
        ProductQa::load(source, SynonymTable::new(), EngineConfig::default()).await,
    );
    (build_app(Arc::clone(&engine)), engine)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn ask(question: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "question": question }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_mode_and_count() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "mode": "static", "products": 2 }));
}

#[tokio::test]
async fn ask_returns_answer_result() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let (status, body) = send(&app, ask("what's the weight of the Vogue Walker?")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["product"], "Vogue Walker");
    assert_eq!(body["attribute"], "weight");
    assert_eq!(body["value"], "6.2 kg (approx., from variant data)");
    assert!(body["confidence"].as_u64().unwrap() <= 100);
    assert!(body.get("suggestions").is_none());
}

#[tokio::test]
async fn ask_unknown_product_lists_suggestions_field() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let (status, body) = send(&app, ask("zzzz qqqq")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], false);
    assert_eq!(body["confidence"], 0);
    assert!(body["suggestions"].is_array());
    assert!(body.get("product").is_none());
}

#[tokio::test]
async fn ask_with_product_link_resolves_handle() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let (_, body) = send(
        &app,
        ask("battery life of https://shop.example.com/products/inogen-one-g5 ?"),
    )
    .await;

    assert_eq!(body["ok"], true);
    assert_eq!(body["product"], "Inogen One G5");
    assert_eq!(body["attribute"], "battery");
    assert_eq!(body["value"], "6.5 hours (from product text)");
}

#[tokio::test]
async fn ask_rejects_malformed_body() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"query": "missing question field"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn reload_picks_up_source_changes() {
    let source = Arc::new(StaticSource::new(catalog_rows()));
    let (app, engine) = app_with(Arc::clone(&source)).await;

    source.set_rows(vec![ProductRow::new("Travel Cane").with_handle("travel-cane")]);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/reload")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "ok": true, "message": "Data reloaded", "products": 1 })
    );
    assert_eq!(engine.snapshot().titles().collect::<Vec<_>>(), vec!["Travel Cane"]);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = app_with(Arc::new(StaticSource::new(catalog_rows()))).await;

    let request = Request::builder()
        .uri("/nope")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
