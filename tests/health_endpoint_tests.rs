//! Integration tests for GET /health.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;

use common::*;
use vitals::{ComponentHandles, RegistryBuilder};

#[tokio::test]
async fn all_mode_reports_every_registered_component() {
    let app = app(RegistryBuilder::new()
        .register(static_component("http", 200))
        .register(static_component("db", 200))
        .register(static_component("rpc", 204)));

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn healthy_component_code_passes_through_verbatim() {
    let app = app(RegistryBuilder::new().register(static_component("http", 200)));

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["plugin_name"], "http");
    assert_eq!(json[0]["status_code"], 200);
    assert_eq!(json[0]["error_message"], "");
}

#[tokio::test]
async fn five_hundred_component_gets_configured_code_not_raw() {
    let (app, _state) = harness(
        RegistryBuilder::new()
            .register(ComponentHandles::new("db").with_status(Arc::new(StaticProbe(503)))),
        599,
    );

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status.as_u16(), 599);
    assert_eq!(json[0]["status_code"], 599);
    assert_eq!(json[0]["error_message"], "internal server error, see logs");
}

#[tokio::test]
async fn degraded_response_line_still_carries_full_body() {
    let app = app(RegistryBuilder::new()
        .register(static_component("http", 200))
        .register(
            ComponentHandles::new("db").with_status(Arc::new(StaticProbe(500))),
        ));

    let (status, json) = get_json(&app, "/health").await;
    // status line and body disagree on purpose
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let reports = json.as_array().expect("array");
    assert_eq!(reports.len(), 2);
    let healthy = reports
        .iter()
        .find(|r| r["plugin_name"] == "http")
        .expect("healthy sibling present");
    assert_eq!(healthy["status_code"], 200);
}

#[tokio::test]
async fn probe_error_is_contained_in_one_report() {
    let app = app(RegistryBuilder::new()
        .register(static_component("http", 200))
        .register(
            ComponentHandles::new("pool").with_status(Arc::new(FailingProbe("worker died"))),
        ));

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let reports = json.as_array().expect("array");
    let failed = reports
        .iter()
        .find(|r| r["plugin_name"] == "pool")
        .expect("failed component reported");
    assert_eq!(failed["status_code"], 503);
    assert_eq!(failed["error_message"], "worker died");
}

#[tokio::test]
async fn nil_answer_reports_unavailable_without_degrading() {
    let app = app(RegistryBuilder::new()
        .register(ComponentHandles::new("cache").with_status(Arc::new(NilProbe))));

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["status_code"], 503);
    assert_eq!(json[0]["error_message"], "plugin is not available, returned nil");
}

#[tokio::test]
async fn uninitialized_entry_reports_404_in_all_mode() {
    let app = app(RegistryBuilder::new().reserve_status("metrics"));

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["plugin_name"], "metrics");
    assert_eq!(json[0]["status_code"], 404);
    assert_eq!(json[0]["error_message"], "plugin is nil or not initialized");
}

#[tokio::test]
async fn unknown_selectors_yield_an_empty_list() {
    let app = app(RegistryBuilder::new().register(static_component("http", 200)));

    let (status, json) = get_json(&app, "/health?plugin=ghost&plugin=phantom").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn named_mode_returns_matched_subset_in_request_order() {
    let app = app(RegistryBuilder::new()
        .register(static_component("a", 200))
        .register(static_component("b", 201))
        .register(static_component("c", 202)));

    let (status, json) = get_json(&app, "/health?plugin=c&plugin=a").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["plugin_name"].as_str().expect("name").to_string())
        .collect();
    assert_eq!(names, ["c", "a"]);
}

#[tokio::test]
async fn named_mode_skips_uninitialized_entries() {
    let app = app(RegistryBuilder::new()
        .reserve_status("metrics")
        .register(static_component("http", 200)));

    let (_, json) = get_json(&app, "/health?plugin=metrics&plugin=http").await;
    let reports = json.as_array().expect("array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["plugin_name"], "http");
}

#[tokio::test]
async fn repeated_queries_are_idempotent() {
    let app = app(RegistryBuilder::new()
        .register(static_component("http", 200))
        .register(static_component("db", 204)));

    let (first_status, mut first) = get_json(&app, "/health").await;
    let (second_status, mut second) = get_json(&app, "/health").await;

    assert_eq!(first_status, second_status);

    // all-mode iteration order is unspecified; compare as sets
    let sort = |v: &mut serde_json::Value| {
        v.as_array_mut()
            .expect("array")
            .sort_by_key(|r| r["plugin_name"].as_str().map(String::from));
    };
    sort(&mut first);
    sort(&mut second);
    assert_eq!(first, second);
}
