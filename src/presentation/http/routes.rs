// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{accounts, articles, events},
    extractors::ACCOUNT_HEADER,
    middleware::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let api = Router::new()
        .route("/api/v1/articles", post(articles::list_article))
        .route("/api/v1/articles/count", get(articles::count_articles))
        .route("/api/v1/articles/for-sale", get(articles::articles_for_sale))
        .route("/api/v1/articles/{id}", get(articles::get_article))
        .route(
            "/api/v1/articles/{id}/purchase",
            post(articles::purchase_article),
        )
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/accounts/{account}/balance", get(accounts::get_balance))
        .route("/api/v1/accounts/{account}/deposit", post(accounts::deposit));

    let api = match rate_limit_layer().filter(|_| rate_limited) {
        Some(limiter) => api.layer(limiter),
        None => api,
    };

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(ACCOUNT_HEADER)])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

