use crate::application::SharedLedger;

/// Read-only ledger access. Queries share the read lock, so each one observes a
/// single consistent snapshot.
pub struct ArticleQueryService {
    pub(super) ledger: SharedLedger,
}

impl ArticleQueryService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }
}
