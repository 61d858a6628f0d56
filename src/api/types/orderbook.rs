//! Orderbook depth types for the OKEx REST API (`depth.do`).

use crate::shared::serde_util::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price level in the orderbook, sent on the wire as `[price, amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLevel")]
pub struct PriceLevel {
    pub price: Decimal,
    /// Total amount at this price level, in base currency
    pub amount: Decimal,
}

#[derive(Deserialize)]
struct RawLevel(
    #[serde(with = "lenient_decimal")] Decimal,
    #[serde(with = "lenient_decimal")] Decimal,
);

impl From<RawLevel> for PriceLevel {
    fn from(RawLevel(price, amount): RawLevel) -> Self {
        Self { price, amount }
    }
}

/// Response for GET /api/v1/depth.do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    /// Ask levels (sell orders), in exchange order
    pub asks: Vec<PriceLevel>,
    /// Bid levels (buy orders), in exchange order
    pub bids: Vec<PriceLevel>,
}
