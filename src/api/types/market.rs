//! Public market-data types for the OKEx REST API (`ticker.do`).

use crate::shared::serde_util::{lenient_decimal, lenient_i64};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest ticker values for a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerData {
    /// Best bid
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub buy: Decimal,
    /// Best ask
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub sell: Decimal,
    /// 24h high
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub high: Decimal,
    /// 24h low
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub low: Decimal,
    /// Last traded price
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub last: Decimal,
    /// 24h volume in base currency
    #[serde(deserialize_with = "lenient_decimal::deserialize")]
    pub vol: Decimal,
}

/// Response for GET /api/v1/ticker.do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Server time (epoch seconds)
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub date: i64,
    pub ticker: TickerData,
}
