use crate::domain::account::{AccountId, Amount};
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::Rejection;

/// Purchase guards, evaluated in a fixed order: existence, availability,
/// seller/buyer distinctness, exact payment. The first failing guard wins.
pub struct CanPurchaseArticleSpec<'a> {
    requested: ArticleId,
    article: Option<&'a Article>,
    buyer: &'a AccountId,
    payment: Amount,
}

impl<'a> CanPurchaseArticleSpec<'a> {
    pub fn new(
        requested: ArticleId,
        article: Option<&'a Article>,
        buyer: &'a AccountId,
        payment: Amount,
    ) -> Self {
        Self {
            requested,
            article,
            buyer,
            payment,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.verify().is_ok()
    }

    pub fn verify(&self) -> Result<&'a Article, Rejection> {
        let article = self
            .article
            .ok_or(Rejection::UnknownArticle(self.requested))?;

        if !article.is_for_sale() {
            return Err(Rejection::AlreadySold(article.id()));
        }

        if article.seller() == self.buyer {
            return Err(Rejection::SelfPurchase(article.id()));
        }

        if !article.price().matches(self.payment) {
            return Err(Rejection::IncorrectPayment {
                expected: article.price().amount(),
                offered: self.payment,
            });
        }

        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::NewListing;
    use crate::domain::article::value_objects::{ArticleDescription, ArticleName, Price};
    use chrono::Utc;

    fn account(id: &str) -> AccountId {
        AccountId::new(id).unwrap()
    }

    fn listed(seller: &str, price: u128) -> Article {
        let listing = NewListing {
            seller: account(seller),
            name: ArticleName::new("article 1"),
            description: ArticleDescription::new("Description for article 1"),
            price: Price::new(Amount::new(price)).unwrap(),
        };
        Article::from_listing(ArticleId(1), listing, Utc::now())
    }

    #[test]
    fn missing_article_is_unknown() {
        let buyer = account("buyer");
        let spec = CanPurchaseArticleSpec::new(ArticleId(3), None, &buyer, Amount::new(10));
        assert_eq!(spec.verify().unwrap_err(), Rejection::UnknownArticle(ArticleId(3)));
    }

    #[test]
    fn sold_check_precedes_self_purchase_and_payment() {
        let mut article = listed("seller", 10);
        article.mark_sold(account("buyer"), Utc::now());
        let seller = account("seller");
        let spec =
            CanPurchaseArticleSpec::new(ArticleId(1), Some(&article), &seller, Amount::new(99));
        assert_eq!(spec.verify().unwrap_err(), Rejection::AlreadySold(ArticleId(1)));
    }

    #[test]
    fn self_purchase_precedes_payment_check() {
        let article = listed("seller", 10);
        let seller = account("seller");
        for offered in [9, 10, 11] {
            let spec = CanPurchaseArticleSpec::new(
                ArticleId(1),
                Some(&article),
                &seller,
                Amount::new(offered),
            );
            assert_eq!(spec.verify().unwrap_err(), Rejection::SelfPurchase(ArticleId(1)));
        }
    }

    #[test]
    fn payment_must_be_exact() {
        let article = listed("seller", 10);
        let buyer = account("buyer");
        let over = CanPurchaseArticleSpec::new(ArticleId(1), Some(&article), &buyer, Amount::new(11));
        assert_eq!(
            over.verify().unwrap_err(),
            Rejection::IncorrectPayment {
                expected: Amount::new(10),
                offered: Amount::new(11),
            }
        );

        let exact =
            CanPurchaseArticleSpec::new(ArticleId(1), Some(&article), &buyer, Amount::new(10));
        assert!(exact.is_satisfied());
    }
}
