// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::{
    SharedLedger,
    ports::{events::EventPublisher, settlement::Settlement, time::Clock},
};

/// Mutating ledger operations. Each takes the ledger write lock for its whole
/// check-settle-commit sequence, which totally orders listings and purchases.
pub struct ArticleCommandService {
    pub(super) ledger: SharedLedger,
    pub(super) settlement: Arc<dyn Settlement>,
    pub(super) events: Arc<dyn EventPublisher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        ledger: SharedLedger,
        settlement: Arc<dyn Settlement>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ledger,
            settlement,
            events,
            clock,
        }
    }
}
