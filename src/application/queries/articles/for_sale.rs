use super::ArticleQueryService;
use crate::application::{dto::ArticlesForSaleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Fails with `DomainError::EmptyCollection` until the first listing exists.
    pub async fn articles_for_sale(&self) -> ApplicationResult<ArticlesForSaleDto> {
        let ledger = self.ledger.read().await;
        let ids = ledger.articles_for_sale()?;
        Ok(ids.into())
    }
}
