// src/application/commands/accounts.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::BalanceDto,
        error::{ApplicationError, ApplicationResult},
        ports::settlement::Settlement,
    },
    domain::account::{AccountId, Amount},
};

pub struct DepositCommand {
    pub amount: u128,
}

pub struct AccountCommandService {
    settlement: Arc<dyn Settlement>,
}

impl AccountCommandService {
    pub fn new(settlement: Arc<dyn Settlement>) -> Self {
        Self { settlement }
    }

    pub async fn deposit(
        &self,
        account: &AccountId,
        command: DepositCommand,
    ) -> ApplicationResult<BalanceDto> {
        let amount = Amount::new(command.amount);
        if amount.is_zero() {
            return Err(ApplicationError::validation(
                "deposit amount must be greater than zero",
            ));
        }

        let balance = self.settlement.deposit(account, amount).await?;
        tracing::info!(account = %account, amount = %amount, balance = %balance, "account credited");

        Ok(BalanceDto {
            account: account.to_string(),
            balance: balance.value(),
        })
    }
}
