pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::article::ArticleLedger;

pub use error::ApplicationResult;

/// The one ledger instance, shared by the command and query services.
pub type SharedLedger = Arc<RwLock<ArticleLedger>>;
