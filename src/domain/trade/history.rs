//! Helpers for working with fetched trade sequences.

use super::Trade;

/// Inclusive timestamp bounds for [`filter_trades`]. Unset bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeFilter {
    pub from_timestamp: Option<i64>,
    pub to_timestamp: Option<i64>,
}

impl TradeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep trades at or after `timestamp`.
    pub fn from_timestamp(mut self, timestamp: i64) -> Self {
        self.from_timestamp = Some(timestamp);
        self
    }

    /// Keep trades at or before `timestamp`.
    pub fn to_timestamp(mut self, timestamp: i64) -> Self {
        self.to_timestamp = Some(timestamp);
        self
    }

    fn matches(&self, trade: &Trade) -> bool {
        self.from_timestamp.map_or(true, |from| trade.timestamp() >= from)
            && self.to_timestamp.map_or(true, |to| trade.timestamp() <= to)
    }
}

/// Sort trades by ascending timestamp. Equal timestamps keep feed order.
pub fn sort_trades(mut trades: Vec<Trade>) -> Vec<Trade> {
    trades.sort_by_key(Trade::timestamp);
    trades
}

/// Keep the trades that fall inside `filter`.
pub fn filter_trades(trades: Vec<Trade>, filter: &TradeFilter) -> Vec<Trade> {
    trades.into_iter().filter(|t| filter.matches(t)).collect()
}
