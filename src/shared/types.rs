//! Shared type definitions for the OKEx SDK.
//!
//! This module contains types used by both the API client and the domain records.

use serde::{Deserialize, Serialize};

// ============================================================================
// Side
// ============================================================================

/// Order or trade side, as spelled by the v1 API (`"buy"` / `"sell"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Side from the `is_sell` flag used by the domain records.
    pub fn from_is_sell(is_sell: bool) -> Self {
        if is_sell {
            Side::Sell
        } else {
            Side::Buy
        }
    }

    /// Parse a wire `type` field. Only the exact strings `"buy"` and `"sell"`
    /// are sides; anything else (e.g. `"buy_market"`) yields `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Side::Sell)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// ============================================================================
// Pair helpers
// ============================================================================

/// Base-currency ticker of a pair, lowercased (`"BTC_usd"` -> `"btc"`).
///
/// A pair without `_` is treated as a bare base symbol.
pub fn base_symbol(pair: &str) -> String {
    pair.split('_').next().unwrap_or(pair).to_lowercase()
}
