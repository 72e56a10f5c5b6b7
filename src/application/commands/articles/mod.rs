// src/application/commands/articles/mod.rs
mod list;
mod purchase;
mod service;

pub use list::{ListArticleCommand, ListArticleCommandBuilder};
pub use purchase::PurchaseArticleCommand;
pub use service::ArticleCommandService;
