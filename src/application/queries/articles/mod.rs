mod count;
mod for_sale;
mod get_by_id;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
