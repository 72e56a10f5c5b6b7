pub mod events;
pub mod settlement;
pub mod time;

pub use events::BroadcastEventPublisher;
pub use settlement::InMemorySettlement;
pub use time::SystemClock;
