// src/domain/errors.rs
use crate::domain::account::Amount;
use crate::domain::article::ArticleId;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A guard that refused a listing or a purchase. Raised before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("price must be greater than zero")]
    InvalidPrice,
    #[error("article {0} does not exist")]
    UnknownArticle(ArticleId),
    #[error("article {0} has already been sold")]
    AlreadySold(ArticleId),
    #[error("the seller of article {0} cannot buy it")]
    SelfPurchase(ArticleId),
    #[error("payment of {offered} does not match the price of {expected}")]
    IncorrectPayment { expected: Amount, offered: Amount },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] Rejection),
    #[error("no articles have been listed yet")]
    EmptyCollection,
    #[error("article {0} not found")]
    NotFound(ArticleId),
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::PreconditionViolation(rejection) => Some(rejection),
            _ => None,
        }
    }
}
