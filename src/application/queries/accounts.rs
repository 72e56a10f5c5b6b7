use std::sync::Arc;

use crate::{
    application::{dto::BalanceDto, error::ApplicationResult, ports::settlement::Settlement},
    domain::account::AccountId,
};

pub struct AccountQueryService {
    settlement: Arc<dyn Settlement>,
}

impl AccountQueryService {
    pub fn new(settlement: Arc<dyn Settlement>) -> Self {
        Self { settlement }
    }

    pub async fn balance(&self, account: &AccountId) -> ApplicationResult<BalanceDto> {
        let balance = self.settlement.balance(account).await?;
        Ok(BalanceDto {
            account: account.to_string(),
            balance: balance.value(),
        })
    }
}
