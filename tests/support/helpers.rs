// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use article_ledger::application::ports::{
    events::EventPublisher, settlement::Settlement, time::Clock,
};
use article_ledger::application::services::ApplicationServices;
use article_ledger::domain::account::{AccountId, Amount};
use article_ledger::infrastructure::{BroadcastEventPublisher, InMemorySettlement};
use article_ledger::presentation::http::{
    extractors::ACCOUNT_HEADER, routes::build_router_with_rate_limiter, state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

/// 10 ether in wei, the price used by the reference purchase walk-through.
pub const TEN_ETHER: u128 = 10_000_000_000_000_000_000;

pub fn account(id: &str) -> AccountId {
    AccountId::new(id).expect("valid account id")
}

pub fn build_services(settlement: Arc<dyn Settlement>) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let events: Arc<dyn EventPublisher> =
        Arc::new(BroadcastEventPublisher::new(Arc::clone(&clock)));
    Arc::new(ApplicationServices::new(settlement, events, clock))
}

pub fn build_test_state(settlement: Arc<dyn Settlement>) -> HttpState {
    HttpState {
        services: build_services(settlement),
        faucet_enabled: true,
        allowed_origins: vec!["*".into()],
    }
}

/// Router over an empty settlement book, faucet on, rate limiter off.
pub async fn make_test_router() -> axum::Router {
    make_test_router_with_balances(Vec::new()).await
}

pub async fn make_test_router_with_balances(balances: Vec<(AccountId, Amount)>) -> axum::Router {
    let settlement: Arc<dyn Settlement> = Arc::new(InMemorySettlement::with_balances(balances));
    build_router_with_rate_limiter(build_test_state(settlement), false)
}

pub fn json_request(method: Method, uri: &str, caller: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(caller) = caller {
        builder = builder.header(ACCOUNT_HEADER, caller);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

/// Sends a request and returns the status with the decoded JSON body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected JSON body")
    };
    (status, json)
}

pub async fn list_article(app: &axum::Router, seller: &str, name: &str, price: u128) -> Value {
    let req = json_request(
        Method::POST,
        "/api/v1/articles",
        Some(seller),
        serde_json::json!({
            "name": name,
            "description": format!("Description for {name}"),
            "price": price.to_string(),
        }),
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "listing failed: {body}");
    body
}

pub async fn balance_of(app: &axum::Router, account: &str) -> u128 {
    let (status, body) = send(app, get_request(&format!("/api/v1/accounts/{account}/balance"))).await;
    assert_eq!(status, StatusCode::OK);
    body["balance"]
        .as_str()
        .expect("balance is a decimal string")
        .parse()
        .expect("balance parses")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
