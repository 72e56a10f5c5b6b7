use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: u64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let ledger = self.ledger.read().await;
        let article = ledger.article(ArticleId(query.id))?;
        Ok(article.into())
    }
}
