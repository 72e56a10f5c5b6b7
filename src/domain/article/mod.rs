pub mod entity;
pub mod events;
pub mod ledger;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleStatus, NewListing};
pub use events::LedgerEvent;
pub use ledger::{ArticleLedger, PurchaseAuthorization};
pub use value_objects::{ArticleDescription, ArticleId, ArticleName, Price};
