//! Trade domain: public trade executions and history helpers.

mod convert;
pub mod history;
pub mod wire;

use crate::shared::Side;
use rust_decimal::Decimal;
use serde::Serialize;

pub(crate) use convert::decode_trades;
pub use history::{filter_trades, sort_trades, TradeFilter};

/// A single executed public trade.
///
/// Trades compare and hash over all of their fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trade {
    trade_id: u64,
    timestamp: i64,
    is_sell: bool,
    price: Decimal,
    amount: Decimal,
    amount_symbol: String,
}

impl Trade {
    pub fn new(
        trade_id: u64,
        timestamp: i64,
        is_sell: bool,
        price: Decimal,
        amount: Decimal,
        amount_symbol: impl Into<String>,
    ) -> Self {
        Self {
            trade_id,
            timestamp,
            is_sell,
            price,
            amount,
            amount_symbol: amount_symbol.into(),
        }
    }

    pub fn trade_id(&self) -> u64 {
        self.trade_id
    }

    /// Execution time exactly as the trade feed reports it.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn is_sell(&self) -> bool {
        self.is_sell
    }

    pub fn side(&self) -> Side {
        Side::from_is_sell(self.is_sell)
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Lowercase base-currency ticker `amount` is denominated in.
    pub fn amount_symbol(&self) -> &str {
        &self.amount_symbol
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade #{} ({} {} {}, price {}, at {})",
            self.trade_id,
            self.side(),
            self.amount,
            self.amount_symbol,
            self.price,
            self.timestamp
        )
    }
}
