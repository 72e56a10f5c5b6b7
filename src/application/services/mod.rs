// src/application/services/mod.rs
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::{
    application::{
        SharedLedger,
        commands::{accounts::AccountCommandService, articles::ArticleCommandService},
        ports::{
            events::{EventPublisher, EventRecord},
            settlement::Settlement,
            time::Clock,
        },
        queries::{
            accounts::AccountQueryService, articles::ArticleQueryService,
            events::EventQueryService,
        },
    },
    domain::article::ArticleLedger,
};

/// Wires the single ledger instance into the command and query services.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub event_queries: Arc<EventQueryService>,
    events: Arc<dyn EventPublisher>,
}

impl ApplicationServices {
    pub fn new(
        settlement: Arc<dyn Settlement>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ledger: SharedLedger = Arc::new(RwLock::new(ArticleLedger::new()));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&ledger),
            Arc::clone(&settlement),
            Arc::clone(&events),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&ledger)));
        let account_commands = Arc::new(AccountCommandService::new(Arc::clone(&settlement)));
        let account_queries = Arc::new(AccountQueryService::new(settlement));
        let event_queries = Arc::new(EventQueryService::new(Arc::clone(&events)));

        Self {
            article_commands,
            article_queries,
            account_commands,
            account_queries,
            event_queries,
            events,
        }
    }

    /// In-process observers receive every listing and sale as it commits.
    pub fn subscribe(&self) -> broadcast::Receiver<EventRecord> {
        self.events.subscribe()
    }
}
