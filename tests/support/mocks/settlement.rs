// tests/support/mocks/settlement.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use article_ledger::application::ports::settlement::{
    PreparedTransfer, Settlement, SettlementError, TransferRequest,
};
use article_ledger::domain::account::{AccountId, Amount};
use article_ledger::infrastructure::InMemorySettlement;
use async_trait::async_trait;

/// コミットが必ず失敗する決済モック。予約と解放は内部の台帳に委譲する。
pub struct FailingCommitSettlement {
    inner: InMemorySettlement,
    aborts: AtomicUsize,
}

impl FailingCommitSettlement {
    pub fn with_balances(balances: impl IntoIterator<Item = (AccountId, Amount)>) -> Self {
        Self {
            inner: InMemorySettlement::with_balances(balances),
            aborts: AtomicUsize::new(0),
        }
    }

    /// abort が呼ばれた回数
    pub fn aborts(&self) -> usize {
        self.aborts.load(Ordering::SeqCst)
    }

    pub fn reserved(&self) -> Amount {
        self.inner.reserved()
    }
}

#[async_trait]
impl Settlement for FailingCommitSettlement {
    async fn prepare(&self, request: TransferRequest) -> Result<PreparedTransfer, SettlementError> {
        self.inner.prepare(request).await
    }

    async fn commit(&self, _transfer: &PreparedTransfer) -> Result<(), SettlementError> {
        Err(SettlementError::Unavailable("commit rejected by test double".into()))
    }

    async fn abort(&self, transfer: &PreparedTransfer) -> Result<(), SettlementError> {
        self.aborts.fetch_add(1, Ordering::SeqCst);
        self.inner.abort(transfer).await
    }

    async fn balance(&self, account: &AccountId) -> Result<Amount, SettlementError> {
        self.inner.balance(account).await
    }

    async fn deposit(&self, account: &AccountId, amount: Amount) -> Result<Amount, SettlementError> {
        self.inner.deposit(account, amount).await
    }
}
