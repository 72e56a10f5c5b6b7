// src/domain/article/entity.rs
use crate::domain::account::AccountId;
use crate::domain::article::value_objects::{ArticleDescription, ArticleId, ArticleName, Price};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    ForSale,
    Sold,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::ForSale => "for_sale",
            ArticleStatus::Sold => "sold",
        }
    }
}

/// A listing record. Every field except the buyer (and its timestamp) is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    seller: AccountId,
    buyer: Option<AccountId>,
    name: ArticleName,
    description: ArticleDescription,
    price: Price,
    listed_at: DateTime<Utc>,
    sold_at: Option<DateTime<Utc>>,
}

impl Article {
    pub(super) fn from_listing(id: ArticleId, listing: NewListing, listed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            seller: listing.seller,
            buyer: None,
            name: listing.name,
            description: listing.description,
            price: listing.price,
            listed_at,
            sold_at: None,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn seller(&self) -> &AccountId {
        &self.seller
    }

    pub fn buyer(&self) -> Option<&AccountId> {
        self.buyer.as_ref()
    }

    pub fn name(&self) -> &ArticleName {
        &self.name
    }

    pub fn description(&self) -> &ArticleDescription {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn listed_at(&self) -> DateTime<Utc> {
        self.listed_at
    }

    pub fn sold_at(&self) -> Option<DateTime<Utc>> {
        self.sold_at
    }

    pub fn is_for_sale(&self) -> bool {
        self.buyer.is_none()
    }

    pub fn status(&self) -> ArticleStatus {
        if self.is_for_sale() {
            ArticleStatus::ForSale
        } else {
            ArticleStatus::Sold
        }
    }

    /// Only reachable through the ledger after every purchase guard has passed.
    pub(super) fn mark_sold(&mut self, buyer: AccountId, sold_at: DateTime<Utc>) {
        debug_assert!(self.buyer.is_none(), "sold articles are terminal");
        self.buyer = Some(buyer);
        self.sold_at = Some(sold_at);
    }
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub seller: AccountId,
    pub name: ArticleName,
    pub description: ArticleDescription,
    pub price: Price,
}
