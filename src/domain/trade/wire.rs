//! Wire types for the public trade feed (`trades.do`).

use crate::shared::serde_util::{lenient_decimal, lenient_i64, lenient_u64};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single public trade row. The endpoint returns a bare array of these.
#[derive(Deserialize, Debug, Clone)]
pub struct TradeRow {
    #[serde(with = "lenient_u64")]
    pub tid: u64,
    #[serde(with = "lenient_i64")]
    pub date: i64,
    /// `"buy"` or `"sell"`.
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(with = "lenient_decimal")]
    pub price: Decimal,
    #[serde(with = "lenient_decimal")]
    pub amount: Decimal,
}
