// src/application/ports/mod.rs
pub mod events;
pub mod settlement;
pub mod time;
