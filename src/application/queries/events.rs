use std::sync::Arc;

use crate::application::{
    dto::{EventPageDto, LedgerEventDto},
    error::ApplicationResult,
    ports::events::EventPublisher,
};

pub struct ListEventsQuery {
    pub after: u64,
    pub limit: u32,
}

pub struct EventQueryService {
    events: Arc<dyn EventPublisher>,
}

impl EventQueryService {
    pub fn new(events: Arc<dyn EventPublisher>) -> Self {
        Self { events }
    }

    pub fn list_events(&self, query: ListEventsQuery) -> ApplicationResult<EventPageDto> {
        const DEFAULT_LIMIT: u32 = 100;
        const MAX_LIMIT: u32 = 1000;

        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };

        let records = self.events.events_after(query.after, limit as usize);
        let last_sequence = records
            .last()
            .map(|record| record.sequence)
            .unwrap_or(query.after);

        Ok(EventPageDto {
            items: records.into_iter().map(LedgerEventDto::from).collect(),
            last_sequence,
        })
    }
}
