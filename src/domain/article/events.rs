use crate::domain::account::AccountId;
use crate::domain::article::value_objects::{ArticleId, ArticleName, Price};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    ArticleListed {
        id: ArticleId,
        seller: AccountId,
        name: ArticleName,
        price: Price,
        at: DateTime<Utc>,
    },
    ArticleSold {
        id: ArticleId,
        seller: AccountId,
        buyer: AccountId,
        name: ArticleName,
        price: Price,
        at: DateTime<Utc>,
    },
}

impl LedgerEvent {
    pub fn article_id(&self) -> ArticleId {
        match self {
            LedgerEvent::ArticleListed { id, .. } | LedgerEvent::ArticleSold { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LedgerEvent::ArticleListed { .. } => "article_listed",
            LedgerEvent::ArticleSold { .. } => "article_sold",
        }
    }

    pub fn at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::ArticleListed { at, .. } | LedgerEvent::ArticleSold { at, .. } => *at,
        }
    }
}
