// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

use super::extractors::ACCOUNT_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_article,
        crate::presentation::http::controllers::articles::purchase_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::count_articles,
        crate::presentation::http::controllers::articles::articles_for_sale,
        crate::presentation::http::controllers::events::list_events,
        crate::presentation::http::controllers::accounts::get_balance,
        crate::presentation::http::controllers::accounts::deposit,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ListArticleRequest,
            crate::presentation::http::controllers::articles::PurchaseRequest,
            crate::presentation::http::controllers::accounts::DepositRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleCountDto,
            crate::application::dto::ArticlesForSaleDto,
            crate::application::dto::PurchaseReceiptDto,
            crate::application::dto::LedgerEventDto,
            crate::application::dto::EventPageDto,
            crate::application::dto::BalanceDto
        )
    ),
    tags(
        (name = "Articles", description = "Listing and buying articles"),
        (name = "Events", description = "Ledger event feed"),
        (name = "Accounts", description = "Settlement balances"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Article Ledger API",
        description = "Marketplace ledger for listing and buying articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "accountHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACCOUNT_HEADER))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
