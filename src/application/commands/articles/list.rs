// src/application/commands/articles/list.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        account::{AccountId, Amount},
        article::{ArticleDescription, ArticleName, NewListing, Price},
    },
};

pub struct ListArticleCommand {
    pub name: String,
    pub description: String,
    pub price: u128,
}

impl ListArticleCommand {
    pub fn builder() -> ListArticleCommandBuilder {
        ListArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct ListArticleCommandBuilder {
    name: Option<String>,
    description: Option<String>,
    price: Option<u128>,
}

impl ListArticleCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: u128) -> Self {
        self.price = Some(price);
        self
    }

    pub fn build(self) -> Result<ListArticleCommand, &'static str> {
        Ok(ListArticleCommand {
            name: self.name.ok_or("name is required")?,
            description: self.description.ok_or("description is required")?,
            price: self.price.ok_or("price is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn list_article(
        &self,
        seller: &AccountId,
        command: ListArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let price = Price::new(Amount::new(command.price))?;

        let listing = NewListing {
            seller: seller.clone(),
            name: ArticleName::new(command.name),
            description: ArticleDescription::new(command.description),
            price,
        };

        let mut ledger = self.ledger.write().await;
        let event = ledger.list_article(listing, self.clock.now());
        let id = event.article_id();
        let article = ArticleDto::from(ledger.article(id)?);
        let record = self.events.publish(event);
        drop(ledger);

        tracing::info!(
            article_id = %id,
            seller = %seller,
            price = %price,
            sequence = record.sequence,
            "article listed"
        );
        Ok(article)
    }
}
