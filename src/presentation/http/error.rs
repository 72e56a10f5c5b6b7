use crate::application::{
    ApplicationResult, error::ApplicationError, ports::settlement::SettlementError,
};
use crate::domain::errors::{DomainError, Rejection};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::Settlement(settlement_err) => Self::from_settlement(settlement_err),
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let status = match &err {
            DomainError::PreconditionViolation(Rejection::InvalidPrice) => StatusCode::BAD_REQUEST,
            DomainError::PreconditionViolation(Rejection::UnknownArticle(_)) => {
                StatusCode::NOT_FOUND
            }
            DomainError::PreconditionViolation(_) => StatusCode::CONFLICT,
            DomainError::EmptyCollection | DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }

    fn from_settlement(err: SettlementError) -> Self {
        let status = match &err {
            SettlementError::InsufficientFunds { .. } => StatusCode::PAYMENT_REQUIRED,
            SettlementError::Overflow(_) => StatusCode::CONFLICT,
            SettlementError::UnknownTransfer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SettlementError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self::new(status, err.to_string())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }

        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountId, Amount};
    use crate::domain::article::ArticleId;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn rejections_map_to_client_errors() {
        let rejected = |r: Rejection| ApplicationError::Domain(DomainError::PreconditionViolation(r));
        assert_eq!(status_of(rejected(Rejection::InvalidPrice)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(rejected(Rejection::UnknownArticle(ArticleId(9)))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(rejected(Rejection::AlreadySold(ArticleId(1)))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(rejected(Rejection::SelfPurchase(ArticleId(1)))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(rejected(Rejection::IncorrectPayment {
                expected: Amount::new(10),
                offered: Amount::new(11),
            })),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn empty_collection_is_not_found() {
        assert_eq!(
            status_of(ApplicationError::Domain(DomainError::EmptyCollection)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn insufficient_funds_is_payment_required() {
        let err = SettlementError::InsufficientFunds {
            account: AccountId::new("buyer").unwrap(),
            available: Amount::ZERO,
            required: Amount::new(10),
        };
        assert_eq!(status_of(err.into()), StatusCode::PAYMENT_REQUIRED);
    }
}
