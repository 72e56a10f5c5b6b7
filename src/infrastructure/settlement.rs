// src/infrastructure/settlement.rs
use crate::application::ports::settlement::{
    PreparedTransfer, Settlement, SettlementError, TransferRequest,
};
use crate::domain::account::{AccountId, Amount};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Book {
    balances: HashMap<AccountId, Amount>,
    holds: HashMap<Uuid, PreparedTransfer>,
}

impl Book {
    fn balance(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<Amount, SettlementError> {
        let updated = self
            .balance(account)
            .checked_add(amount)
            .ok_or_else(|| SettlementError::Overflow(account.clone()))?;
        self.balances.insert(account.clone(), updated);
        Ok(updated)
    }
}

/// Balance book kept in process memory. Prepared transfers debit the payer immediately
/// and park the amount in a hold until it is committed to the payee or returned.
#[derive(Debug, Default)]
pub struct InMemorySettlement {
    book: Mutex<Book>,
}

impl InMemorySettlement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(balances: impl IntoIterator<Item = (AccountId, Amount)>) -> Self {
        let book = Book {
            balances: balances.into_iter().collect(),
            holds: HashMap::new(),
        };
        Self {
            book: Mutex::new(book),
        }
    }

    /// Total amount currently parked in uncommitted transfers.
    pub fn reserved(&self) -> Amount {
        self.lock()
            .holds
            .values()
            .fold(Amount::ZERO, |total, hold| {
                total.checked_add(hold.request.amount).unwrap_or(total)
            })
    }

    fn lock(&self) -> MutexGuard<'_, Book> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Settlement for InMemorySettlement {
    async fn prepare(&self, request: TransferRequest) -> Result<PreparedTransfer, SettlementError> {
        let mut book = self.lock();

        let available = book.balance(&request.from);
        let remaining = available.checked_sub(request.amount).ok_or_else(|| {
            SettlementError::InsufficientFunds {
                account: request.from.clone(),
                available,
                required: request.amount,
            }
        })?;

        if book.balance(&request.to).checked_add(request.amount).is_none() {
            return Err(SettlementError::Overflow(request.to.clone()));
        }

        book.balances.insert(request.from.clone(), remaining);
        let transfer = PreparedTransfer {
            id: Uuid::new_v4(),
            request,
        };
        book.holds.insert(transfer.id, transfer.clone());
        tracing::debug!(transfer_id = %transfer.id, "payment reserved");
        Ok(transfer)
    }

    async fn commit(&self, transfer: &PreparedTransfer) -> Result<(), SettlementError> {
        let mut book = self.lock();
        let hold = book
            .holds
            .remove(&transfer.id)
            .ok_or(SettlementError::UnknownTransfer(transfer.id))?;

        if let Err(err) = book.credit(&hold.request.to, hold.request.amount) {
            book.holds.insert(hold.id, hold);
            return Err(err);
        }
        Ok(())
    }

    async fn abort(&self, transfer: &PreparedTransfer) -> Result<(), SettlementError> {
        let mut book = self.lock();
        let hold = book
            .holds
            .remove(&transfer.id)
            .ok_or(SettlementError::UnknownTransfer(transfer.id))?;

        if let Err(err) = book.credit(&hold.request.from, hold.request.amount) {
            book.holds.insert(hold.id, hold);
            return Err(err);
        }
        Ok(())
    }

    async fn balance(&self, account: &AccountId) -> Result<Amount, SettlementError> {
        Ok(self.lock().balance(account))
    }

    async fn deposit(&self, account: &AccountId, amount: Amount) -> Result<Amount, SettlementError> {
        self.lock().credit(account, amount)
    }
}
