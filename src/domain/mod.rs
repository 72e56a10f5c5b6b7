pub mod account;
pub mod article;
pub mod errors;
