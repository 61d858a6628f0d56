//! # OKEx Rust SDK
//!
//! A Rust SDK for the OKCoin / OKEx v1 trading REST API.
//!
//! ## Modules
//!
//! - [`api`]: Blocking REST client: request signing, response validation,
//!   market data, balances, order placement, cancellation and history
//! - [`domain`]: Immutable [`Order`](domain::order::Order) and
//!   [`Trade`](domain::trade::Trade) records built from API responses
//! - [`shared`]: Decimal and timestamp normalization, wire serde helpers
//! - [`config`]: Connection parameters loaded from the environment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use okex_sdk::prelude::*;
//! use rust_decimal_macros::dec;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), ApiError> {
//!     let api = OkexApi::new(DEFAULT_API_URL, "api-key", "secret-key", Duration::from_secs(10))?;
//!
//!     let order_id = api.place_order("btc_usd", true, dec!(6500.5), dec!(0.01))?;
//!     let cancelled = api.cancel_order("btc_usd", order_id)?;
//!     println!("Cancelled #{}: {}", order_id, cancelled);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared utilities and types.
/// Used across all SDK modules.
pub mod shared;

/// Domain records (vertical slices): record, wire rows, conversions.
pub mod domain;

/// Network URL constants.
pub mod network;

/// Client configuration from the environment.
pub mod config;

/// REST API client module.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use okex_sdk::prelude::*;
/// ```
pub mod prelude {
    // API client
    pub use crate::api::{
        ApiError, ApiEvent, ApiResult, Depth, EventSink, Funds, OkexApi, OkexApiBuilder,
        PriceLevel, RecordingSink, Rejection, Ticker, TickerData, TracingSink, Transport,
    };

    // Domain records
    pub use crate::domain::order::Order;
    pub use crate::domain::trade::{filter_trades, sort_trades, Trade, TradeFilter};

    // Configuration and network constants
    pub use crate::config::OkexConfig;
    pub use crate::network::{DEFAULT_API_URL, OKCOIN_API_URL};

    // Shared utilities
    pub use crate::shared::{format_decimal, parse_decimal, Side};
}
