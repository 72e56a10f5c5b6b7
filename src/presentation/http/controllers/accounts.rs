// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::DepositCommand,
    dto::{BalanceDto, serde_amount},
    error::ApplicationError,
};
use crate::domain::account::AccountId;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositRequest {
    #[serde(with = "serde_amount")]
    #[schema(value_type = String, example = "100")]
    pub amount: u128,
}

fn parse_account(raw: String) -> HttpResult<AccountId> {
    AccountId::new(raw).map_err(|err| HttpError::from_error(err.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account}/balance",
    params(("account" = String, Path, description = "Account id")),
    responses(
        (status = 200, description = "Settled balance.", body = BalanceDto),
        (status = 400, description = "Malformed account id.", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn get_balance(
    Extension(state): Extension<HttpState>,
    Path(account): Path<String>,
) -> HttpResult<Json<BalanceDto>> {
    let account = parse_account(account)?;
    state
        .services
        .account_queries
        .balance(&account)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account}/deposit",
    request_body = DepositRequest,
    params(("account" = String, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account credited.", body = BalanceDto),
        (status = 400, description = "Zero amount.", body = ErrorResponse),
        (status = 403, description = "Faucet disabled.", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
pub async fn deposit(
    Extension(state): Extension<HttpState>,
    Path(account): Path<String>,
    Json(payload): Json<DepositRequest>,
) -> HttpResult<Json<BalanceDto>> {
    if !state.faucet_enabled {
        return Err(HttpError::from_error(ApplicationError::forbidden(
            "deposits are disabled",
        )));
    }

    let account = parse_account(account)?;
    state
        .services
        .account_commands
        .deposit(
            &account,
            DepositCommand {
                amount: payload.amount,
            },
        )
        .await
        .into_http()
        .map(Json)
}
