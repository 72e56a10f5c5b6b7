use super::ArticleQueryService;
use crate::application::{dto::ArticleCountDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn count_articles(&self) -> ApplicationResult<ArticleCountDto> {
        let ledger = self.ledger.read().await;
        Ok(ArticleCountDto {
            count: ledger.article_count(),
        })
    }
}
