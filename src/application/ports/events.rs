// src/application/ports/events.rs
use crate::domain::article::LedgerEvent;
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

/// A published ledger event with its position in the global event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: LedgerEvent,
}

pub trait EventPublisher: Send + Sync {
    /// Called while the ledger is still locked, so sequence order follows ledger order.
    fn publish(&self, event: LedgerEvent) -> EventRecord;

    /// Records with `sequence > after`, oldest first, at most `limit` of them.
    fn events_after(&self, after: u64, limit: usize) -> Vec<EventRecord>;

    fn subscribe(&self) -> broadcast::Receiver<EventRecord>;
}
