// src/application/ports/settlement.rs
use crate::domain::account::{AccountId, Amount};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
}

/// A transfer whose funds are already reserved. It must be either committed or aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTransfer {
    pub id: Uuid,
    pub request: TransferRequest,
}

#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("insufficient funds: account {account} holds {available}, needs {required}")]
    InsufficientFunds {
        account: AccountId,
        available: Amount,
        required: Amount,
    },
    #[error("balance of account {0} would overflow")]
    Overflow(AccountId),
    #[error("unknown transfer {0}")]
    UnknownTransfer(Uuid),
    #[error("settlement backend unavailable: {0}")]
    Unavailable(String),
}

/// Moves value between accounts in two phases. `prepare` reserves the funds so that a
/// subsequent `commit` of the same transfer cannot fail for lack of balance; `abort`
/// releases the reservation.
#[async_trait]
pub trait Settlement: Send + Sync {
    async fn prepare(&self, request: TransferRequest) -> Result<PreparedTransfer, SettlementError>;
    async fn commit(&self, transfer: &PreparedTransfer) -> Result<(), SettlementError>;
    async fn abort(&self, transfer: &PreparedTransfer) -> Result<(), SettlementError>;
    async fn balance(&self, account: &AccountId) -> Result<Amount, SettlementError>;
    async fn deposit(&self, account: &AccountId, amount: Amount) -> Result<Amount, SettlementError>;
}
