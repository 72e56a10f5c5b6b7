use crate::domain::account::Amount;
use crate::domain::errors::{DomainResult, Rejection};
use std::fmt;

/// Sequence-assigned article identifier. Assigned ids start at 1; 0 never names an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(pub u64);

impl ArticleId {
    pub const NONE: ArticleId = ArticleId(0);
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl From<u64> for ArticleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored verbatim; content rules belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleName(String);

impl ArticleName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Listing price. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Amount);

impl Price {
    pub fn new(amount: Amount) -> DomainResult<Self> {
        if amount.is_zero() {
            return Err(Rejection::InvalidPrice.into());
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> Amount {
        self.0
    }

    pub fn matches(self, payment: Amount) -> bool {
        self.0 == payment
    }
}

impl From<Price> for Amount {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
