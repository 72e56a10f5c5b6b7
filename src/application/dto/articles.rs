use crate::domain::article::{Article, ArticleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_amount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: u64,
    pub seller: String,
    #[serde(default)]
    pub buyer: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(with = "serde_amount")]
    #[schema(value_type = String, example = "10000000000000000000")]
    pub price: u128,
    /// `for_sale` or `sold`.
    pub status: String,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub sold_at: Option<DateTime<Utc>>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().into(),
            seller: article.seller().to_string(),
            buyer: article.buyer().map(ToString::to_string),
            name: article.name().to_string(),
            description: article.description().to_string(),
            price: article.price().amount().value(),
            status: article.status().as_str().to_string(),
            listed_at: article.listed_at(),
            sold_at: article.sold_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCountDto {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlesForSaleDto {
    pub ids: Vec<u64>,
}

impl From<Vec<ArticleId>> for ArticlesForSaleDto {
    fn from(ids: Vec<ArticleId>) -> Self {
        Self {
            ids: ids.into_iter().map(u64::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseReceiptDto {
    pub article_id: u64,
    pub seller: String,
    pub buyer: String,
    #[serde(with = "serde_amount")]
    #[schema(value_type = String)]
    pub amount: u128,
    pub sold_at: DateTime<Utc>,
}
