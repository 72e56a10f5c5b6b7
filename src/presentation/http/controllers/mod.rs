// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod articles;
pub mod events;
