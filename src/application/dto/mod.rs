pub mod accounts;
pub mod articles;
pub mod events;
pub mod serde_amount;

pub use accounts::BalanceDto;
pub use articles::{ArticleCountDto, ArticleDto, ArticlesForSaleDto, PurchaseReceiptDto};
pub use events::{EventPageDto, LedgerEventDto};
