use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_amount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BalanceDto {
    pub account: String,
    #[serde(with = "serde_amount")]
    #[schema(value_type = String)]
    pub balance: u128,
}
