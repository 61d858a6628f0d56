//! Wire types for order rows (`order_info.do`, `order_history.do`).

use crate::shared::serde_util::{lenient_decimal, lenient_i64, lenient_u64};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single row of an `orders` array.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderRow {
    #[serde(with = "lenient_u64")]
    pub order_id: u64,
    /// Creation time in epoch milliseconds.
    #[serde(with = "lenient_i64")]
    pub create_date: i64,
    pub symbol: String,
    /// `"buy"` / `"sell"` for limit orders; other markers for market or
    /// cancelled rows.
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(with = "lenient_decimal")]
    pub price: Decimal,
    #[serde(with = "lenient_decimal")]
    pub amount: Decimal,
    #[serde(with = "lenient_decimal")]
    pub deal_amount: Decimal,
}

/// Envelope of the order endpoints.
///
/// Rows are kept untyped until they pass the side filter, so rows the client
/// discards never fail decoding.
#[derive(Deserialize, Debug, Clone)]
pub struct OrdersResponse {
    pub orders: Vec<serde_json::Value>,
}
