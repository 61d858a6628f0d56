//! REST API client module for OKEx.
//!
//! This module provides a typed, blocking HTTP client for the OKCoin / OKEx
//! v1 REST API: public market data, balances, order placement and
//! cancellation, open orders and paginated order history.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use okex_sdk::api::OkexApi;
//! use std::time::Duration;
//!
//! let api = OkexApi::new("https://www.okex.com", "api-key", "secret-key", Duration::from_secs(10))?;
//!
//! let depth = api.depth("btc_usd")?;
//! println!("Best ask: {:?}", depth.asks.last());
//!
//! let history = api.get_orders_history("btc_usd", 50)?;
//! println!("Fetched {} filled orders", history.len());
//! ```
//!
//! # Client Configuration
//!
//! Use the builder to inject a transport or an event sink:
//!
//! ```rust,ignore
//! use okex_sdk::api::{OkexApi, RecordingSink};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let api = OkexApi::builder("https://www.okex.com", "api-key", "secret-key", Duration::from_secs(10))
//!     .event_sink(sink.clone())
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use okex_sdk::api::{ApiError, Rejection};
//!
//! match api.get_balances() {
//!     Ok(funds) => println!("Free BTC: {}", funds.free_balance("btc")),
//!     Err(ApiError::Rejected(Rejection::ErrorCode(code))) => println!("Exchange error {}", code),
//!     Err(ApiError::HttpStatus { status, .. }) => println!("HTTP {}", status),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod events;
pub mod signing;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use client::{OkexApi, OkexApiBuilder, ORDER_HISTORY_MAX_PAGES, ORDER_HISTORY_PAGE_LENGTH};
pub use error::{ApiError, ApiResult, Rejection};
pub use events::{ApiEvent, EventSink, RecordingSink, TracingSink};
pub use signing::{create_signature, ParamValue, RequestParams};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use types::*;
pub use validate::validate_response;
