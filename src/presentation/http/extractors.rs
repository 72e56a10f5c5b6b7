// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, domain::account::AccountId};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header naming the account on whose behalf a request acts.
pub const ACCOUNT_HEADER: &str = "x-account";

#[derive(Debug, Clone)]
pub struct Caller(pub AccountId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts.headers.get(ACCOUNT_HEADER).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(format!(
                "missing {ACCOUNT_HEADER} header"
            )))
        })?;

        let raw = value.to_str().map_err(|_| {
            HttpError::from_error(ApplicationError::validation(format!(
                "{ACCOUNT_HEADER} header must be visible ASCII"
            )))
        })?;

        let account = AccountId::new(raw).map_err(|err| HttpError::from_error(err.into()))?;
        Ok(Self(account))
    }
}
