// tests/e2e_error_statuses.rs
use std::sync::Arc;

use article_ledger::application::ports::settlement::Settlement;
use article_ledger::infrastructure::InMemorySettlement;
use article_ledger::presentation::http::routes::build_router_with_rate_limiter;
use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{account, get_request, json_request, list_article};

async fn oneshot(app: &axum::Router, req: axum::http::Request<axum::body::Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.unwrap()
}

/// 何も出品されていない状態の販売中一覧は 404 を返す
#[tokio::test]
async fn for_sale_before_any_listing_returns_404() {
    let app = support::make_test_router().await;
    let resp = oneshot(&app, get_request("/api/v1/articles/for-sale")).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 件数は出品がなくても 0 を返す
#[tokio::test]
async fn count_before_any_listing_is_zero() {
    let app = support::make_test_router().await;
    let (status, body) = support::send(&app, get_request("/api/v1/articles/count")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

/// 存在しない ID や 0 番の記事は 404 を返す
#[tokio::test]
async fn unknown_article_returns_404() {
    let app = support::make_test_router().await;
    list_article(&app, "seller", "Lamp", 5).await;

    for uri in ["/api/v1/articles/0", "/api/v1/articles/2"] {
        let resp = oneshot(&app, get_request(uri)).await;
        support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

/// 価格 0 の出品は 400 を返し、件数は増えない
#[tokio::test]
async fn zero_price_listing_returns_400() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles",
        Some("seller"),
        json!({ "name": "Free", "description": "nothing", "price": "0" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let (_, count) = support::send(&app, get_request("/api/v1/articles/count")).await;
    assert_eq!(count["count"], 0);
}

/// 空の名前と説明もそのまま出品できる
#[tokio::test]
async fn empty_text_is_stored_verbatim() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles",
        Some("seller"),
        json!({ "name": "", "description": "", "price": "1" }),
    );
    let (status, body) = support::send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}

/// x-account ヘッダーがない出品は 401 を返す
#[tokio::test]
async fn listing_without_caller_returns_401() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles",
        None,
        json!({ "name": "Lamp", "description": "d", "price": "1" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// 存在しない記事の購入は 404 を返す
#[tokio::test]
async fn purchase_of_unknown_article_returns_404() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles/7/purchase",
        Some("buyer"),
        json!({ "payment": "1" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 自分の記事の購入は 409 を返す
#[tokio::test]
async fn self_purchase_returns_409() {
    let app = support::make_test_router().await;
    list_article(&app, "seller", "Lamp", 5).await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles/1/purchase",
        Some("seller"),
        json!({ "payment": "5" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

/// 残高不足の購入は 402 を返す
#[tokio::test]
async fn insufficient_funds_returns_402() {
    let app = support::make_test_router_with_balances(vec![(account("buyer"), 4u128.into())]).await;
    list_article(&app, "seller", "Lamp", 5).await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles/1/purchase",
        Some("buyer"),
        json!({ "payment": "5" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::PAYMENT_REQUIRED, "Payment Required").await;
}

/// 金額が数値でなければ JSON 抽出で拒否される
#[tokio::test]
async fn malformed_amount_is_rejected() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/articles",
        Some("seller"),
        json!({ "name": "Lamp", "description": "d", "price": "ten" }),
    );
    let resp = oneshot(&app, req).await;
    assert!(resp.status().is_client_error());
}

/// フォーセットが無効なら入金は 403 を返す
#[tokio::test]
async fn deposit_with_faucet_disabled_returns_403() {
    let settlement: Arc<dyn Settlement> = Arc::new(InMemorySettlement::new());
    let mut state = support::build_test_state(settlement);
    state.faucet_enabled = false;
    let app = build_router_with_rate_limiter(state, false);

    let req = json_request(
        Method::POST,
        "/api/v1/accounts/alice/deposit",
        None,
        json!({ "amount": "10" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

/// 0 の入金は 400 を返す
#[tokio::test]
async fn zero_deposit_returns_400() {
    let app = support::make_test_router().await;
    let req = json_request(
        Method::POST,
        "/api/v1/accounts/alice/deposit",
        None,
        json!({ "amount": "0" }),
    );
    let resp = oneshot(&app, req).await;
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
