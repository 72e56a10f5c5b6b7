use crate::application::ports::events::EventRecord;
use crate::domain::article::LedgerEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_amount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LedgerEventDto {
    pub sequence: u64,
    /// `article_listed` or `article_sold`.
    pub kind: String,
    pub article_id: u64,
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
    pub name: String,
    #[serde(with = "serde_amount")]
    #[schema(value_type = String)]
    pub price: u128,
    pub at: DateTime<Utc>,
    pub recorded_at: DateTime<Utc>,
}

impl From<EventRecord> for LedgerEventDto {
    fn from(record: EventRecord) -> Self {
        let kind = record.event.kind().to_string();
        let at = record.event.at();
        let (article_id, seller, buyer, name, price) = match record.event {
            LedgerEvent::ArticleListed {
                id,
                seller,
                name,
                price,
                ..
            } => (id, seller, None, name, price),
            LedgerEvent::ArticleSold {
                id,
                seller,
                buyer,
                name,
                price,
                ..
            } => (id, seller, Some(buyer), name, price),
        };

        Self {
            sequence: record.sequence,
            kind,
            article_id: article_id.into(),
            seller: seller.into_inner(),
            buyer: buyer.map(|b| b.into_inner()),
            name: name.into_inner(),
            price: price.amount().value(),
            at,
            recorded_at: record.recorded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPageDto {
    pub items: Vec<LedgerEventDto>,
    /// Pass as `after` to fetch the next page.
    pub last_sequence: u64,
}
