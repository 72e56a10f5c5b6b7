// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of listing and sale timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
