// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{ListArticleCommand, PurchaseArticleCommand},
    dto::{ArticleCountDto, ArticleDto, ArticlesForSaleDto, PurchaseReceiptDto, serde_amount},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Caller;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListArticleRequest {
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit.
    #[serde(with = "serde_amount")]
    #[schema(value_type = String, example = "10000000000000000000")]
    pub price: u128,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseRequest {
    /// Must equal the article price exactly.
    #[serde(with = "serde_amount")]
    #[schema(value_type = String, example = "10000000000000000000")]
    pub payment: u128,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ListArticleRequest,
    params(("x-account" = String, Header, description = "Seller account")),
    responses(
        (status = 201, description = "Article listed.", body = ArticleDto),
        (status = 400, description = "Zero price.", body = ErrorResponse),
        (status = 401, description = "Missing caller.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_article(
    Extension(state): Extension<HttpState>,
    Caller(seller): Caller,
    Json(payload): Json<ListArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = ListArticleCommand {
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };

    state
        .services
        .article_commands
        .list_article(&seller, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/purchase",
    request_body = PurchaseRequest,
    params(
        ("id" = u64, Path, description = "Article id"),
        ("x-account" = String, Header, description = "Buyer account")
    ),
    responses(
        (status = 200, description = "Article bought.", body = PurchaseReceiptDto),
        (status = 402, description = "Buyer cannot cover the price.", body = ErrorResponse),
        (status = 404, description = "Article does not exist.", body = ErrorResponse),
        (status = 409, description = "Already sold, own article, or wrong amount.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn purchase_article(
    Extension(state): Extension<HttpState>,
    Caller(buyer): Caller,
    Path(id): Path<u64>,
    Json(payload): Json<PurchaseRequest>,
) -> HttpResult<Json<PurchaseReceiptDto>> {
    let command = PurchaseArticleCommand {
        article_id: id,
        payment: payload.payment,
    };

    state
        .services
        .article_commands
        .purchase_article(&buyer, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article record.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<u64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/count",
    responses((status = 200, description = "Number of articles ever listed.", body = ArticleCountDto)),
    tag = "Articles"
)]
pub async fn count_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleCountDto>> {
    state
        .services
        .article_queries
        .count_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/for-sale",
    responses(
        (status = 200, description = "Ids of unsold articles, ascending.", body = ArticlesForSaleDto),
        (status = 404, description = "Nothing has been listed yet.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn articles_for_sale(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticlesForSaleDto>> {
    state
        .services
        .article_queries
        .articles_for_sale()
        .await
        .into_http()
        .map(Json)
}
