pub mod accounts;
pub mod articles;
pub mod events;
