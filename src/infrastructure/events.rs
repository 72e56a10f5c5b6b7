// src/infrastructure/events.rs
use crate::application::ports::{
    events::{EventPublisher, EventRecord},
    time::Clock,
};
use crate::domain::article::LedgerEvent;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Fans ledger events out over a broadcast channel and keeps the full history so that
/// late observers can catch up by sequence number.
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<EventRecord>,
    log: Mutex<Vec<EventRecord>>,
    clock: Arc<dyn Clock>,
}

impl BroadcastEventPublisher {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY, clock)
    }

    /// `capacity` bounds how far a subscriber may lag before it misses events; zero is
    /// bumped to one.
    pub fn with_capacity(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            log: Mutex::new(Vec::new()),
            clock,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventPublisher for BroadcastEventPublisher {
    fn publish(&self, event: LedgerEvent) -> EventRecord {
        let mut log = self.lock();
        let record = EventRecord {
            sequence: log.len() as u64 + 1,
            recorded_at: self.clock.now(),
            event,
        };
        log.push(record.clone());

        // Sent under the log lock so subscribers see the same order as the log.
        // No subscribers is not an error; the log still has the record.
        if let Ok(receivers) = self.sender.send(record.clone()) {
            tracing::debug!(
                sequence = record.sequence,
                kind = record.event.kind(),
                receivers,
                "ledger event delivered"
            );
        }
        drop(log);
        record
    }

    fn events_after(&self, after: u64, limit: usize) -> Vec<EventRecord> {
        let log = self.lock();
        let start = usize::try_from(after).unwrap_or(usize::MAX).min(log.len());
        log[start..].iter().take(limit).cloned().collect()
    }

    fn subscribe(&self) -> broadcast::Receiver<EventRecord> {
        self.sender.subscribe()
    }
}
