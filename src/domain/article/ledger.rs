// src/domain/article/ledger.rs
use crate::domain::account::{AccountId, Amount};
use crate::domain::article::entity::{Article, NewListing};
use crate::domain::article::events::LedgerEvent;
use crate::domain::article::specifications::CanPurchaseArticleSpec;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Append-only article registry.
///
/// Ids are handed out by `sequence` in listing order, so `articles[i]` always holds id
/// `i + 1` and the counter always equals the number of stored articles. Every mutating
/// operation checks all of its guards before touching state.
#[derive(Debug, Default)]
pub struct ArticleLedger {
    sequence: u64,
    articles: Vec<Article>,
}

/// Proof that a purchase passed every guard. Only the ledger can produce one, and
/// completing it re-runs the guards against the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseAuthorization {
    article_id: ArticleId,
    seller: AccountId,
    buyer: AccountId,
    payment: Amount,
}

impl PurchaseAuthorization {
    pub fn seller(&self) -> &AccountId {
        &self.seller
    }
}

impl ArticleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of articles ever listed.
    pub fn article_count(&self) -> u64 {
        self.sequence
    }

    pub fn list_article(&mut self, listing: NewListing, listed_at: DateTime<Utc>) -> LedgerEvent {
        self.sequence += 1;
        let id = ArticleId(self.sequence);
        let article = Article::from_listing(id, listing, listed_at);

        let event = LedgerEvent::ArticleListed {
            id,
            seller: article.seller().clone(),
            name: article.name().clone(),
            price: article.price(),
            at: listed_at,
        };
        self.articles.push(article);
        event
    }

    pub fn authorize_purchase(
        &self,
        id: ArticleId,
        buyer: &AccountId,
        payment: Amount,
    ) -> DomainResult<PurchaseAuthorization> {
        let article = CanPurchaseArticleSpec::new(id, self.get(id), buyer, payment).verify()?;
        Ok(PurchaseAuthorization {
            article_id: article.id(),
            seller: article.seller().clone(),
            buyer: buyer.clone(),
            payment,
        })
    }

    pub fn complete_purchase(
        &mut self,
        authorization: PurchaseAuthorization,
        sold_at: DateTime<Utc>,
    ) -> DomainResult<LedgerEvent> {
        let PurchaseAuthorization {
            article_id,
            buyer,
            payment,
            ..
        } = authorization;

        CanPurchaseArticleSpec::new(article_id, self.get(article_id), &buyer, payment).verify()?;

        let article = self
            .get_mut(article_id)
            .ok_or(DomainError::NotFound(article_id))?;
        article.mark_sold(buyer.clone(), sold_at);

        Ok(LedgerEvent::ArticleSold {
            id: article_id,
            seller: article.seller().clone(),
            buyer,
            name: article.name().clone(),
            price: article.price(),
            at: sold_at,
        })
    }

    /// Authorize and complete in one step, for callers with no settlement to run in between.
    pub fn purchase_article(
        &mut self,
        id: ArticleId,
        buyer: &AccountId,
        payment: Amount,
        sold_at: DateTime<Utc>,
    ) -> DomainResult<LedgerEvent> {
        let authorization = self.authorize_purchase(id, buyer, payment)?;
        self.complete_purchase(authorization, sold_at)
    }

    pub fn article(&self, id: ArticleId) -> DomainResult<&Article> {
        self.get(id).ok_or(DomainError::NotFound(id))
    }

    /// Ids of unsold articles, ascending. Fails when nothing has ever been listed so
    /// callers can tell an empty registry from a sold-out one.
    pub fn articles_for_sale(&self) -> DomainResult<Vec<ArticleId>> {
        if self.sequence == 0 {
            return Err(DomainError::EmptyCollection);
        }

        Ok(self
            .articles
            .iter()
            .filter(|article| article.is_for_sale())
            .map(Article::id)
            .collect())
    }

    fn index_of(id: ArticleId) -> Option<usize> {
        id.0.checked_sub(1).and_then(|index| usize::try_from(index).ok())
    }

    fn get(&self, id: ArticleId) -> Option<&Article> {
        Self::index_of(id).and_then(|index| self.articles.get(index))
    }

    fn get_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        Self::index_of(id).and_then(|index| self.articles.get_mut(index))
    }
}
