//! OKEx REST API client implementation.
//!
//! The [`OkexApi`] provides a typed, blocking interface to the OKCoin / OKEx
//! v1 REST API. Every call is one request/response cycle: build parameters,
//! sign them (private endpoints), send them through the [`Transport`],
//! validate the response and map it into typed records. Failures surface
//! immediately; nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use okex_sdk::api::OkexApi;
//! use std::time::Duration;
//!
//! let api = OkexApi::new("https://www.okex.com", "api-key", "secret-key", Duration::from_secs(10))?;
//!
//! let ticker = api.ticker("btc_usd")?;
//! println!("Last price: {}", ticker.ticker.last);
//!
//! for order in api.get_orders("btc_usd")? {
//!     println!("{}", order);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiResult};
use crate::api::events::{ApiEvent, EventSink, TracingSink};
use crate::api::signing::{create_signature, RequestParams};
use crate::api::transport::{HttpRequest, Transport};
use crate::api::types::account::UserInfoResponse;
use crate::api::types::*;
use crate::api::validate::validate_response;
use crate::domain::order::wire::OrdersResponse;
use crate::domain::order::{decode_orders, is_plain_order, Order};
use crate::domain::trade::{decode_trades, Trade};
use crate::shared::{decimal_to_f64, Side};

const TICKER_PATH: &str = "/api/v1/ticker.do";
const DEPTH_PATH: &str = "/api/v1/depth.do";
const TRADES_PATH: &str = "/api/v1/trades.do";
const USER_INFO_PATH: &str = "/api/v1/userinfo.do";
const ORDER_INFO_PATH: &str = "/api/v1/order_info.do";
const ORDER_HISTORY_PATH: &str = "/api/v1/order_history.do";
const TRADE_PATH: &str = "/api/v1/trade.do";
const CANCEL_ORDER_PATH: &str = "/api/v1/cancel_order.do";

/// `order_id` value asking `order_info.do` for every open order.
const ALL_OPEN_ORDERS: &str = "-1";

/// Rows requested per `order_history.do` page.
pub const ORDER_HISTORY_PAGE_LENGTH: u32 = 200;

/// Upper bound on pages fetched by one history call, whatever the exchange returns.
pub const ORDER_HISTORY_MAX_PAGES: u32 = 99;

/// `status` filter for completed (filled) orders.
const ORDER_STATUS_COMPLETED: u32 = 100;

/// Builder for configuring [`OkexApi`].
pub struct OkexApiBuilder {
    api_server: String,
    api_key: String,
    secret_key: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    event_sink: Option<Arc<dyn EventSink>>,
}

impl OkexApiBuilder {
    /// Create a new builder. All four connection parameters are required.
    pub fn new(
        api_server: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            api_server: api_server.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            timeout,
            transport: None,
            event_sink: None,
        }
    }

    /// Send requests through `transport` instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Report order lifecycle events to `sink` instead of `tracing`.
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = Some(sink);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if a connection parameter is empty or the
    /// timeout is zero, and [`ApiError::Transport`] if the default HTTP client
    /// cannot be initialized.
    pub fn build(self) -> ApiResult<OkexApi> {
        if self.api_server.is_empty() {
            return Err(ApiError::Config("api_server cannot be empty".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(ApiError::Config("api_key cannot be empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(ApiError::Config("secret_key cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::Config("timeout must be positive".to_string()));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Self::default_transport(self.timeout)?,
        };

        Ok(OkexApi {
            api_server: self.api_server,
            api_key: self.api_key,
            secret_key: self.secret_key,
            timeout: self.timeout,
            transport,
            event_sink: self.event_sink.unwrap_or_else(|| Arc::new(TracingSink)),
        })
    }

    #[cfg(feature = "http")]
    fn default_transport(timeout: Duration) -> ApiResult<Arc<dyn Transport>> {
        Ok(Arc::new(crate::api::transport::ReqwestTransport::new(timeout)?))
    }

    #[cfg(not(feature = "http"))]
    fn default_transport(_timeout: Duration) -> ApiResult<Arc<dyn Transport>> {
        Err(ApiError::Config(
            "no transport configured: enable the `http` feature or supply one".to_string(),
        ))
    }
}

/// OKEx REST API client.
///
/// Holds only credentials, the server URL and its collaborators, so it can be
/// cloned freely and shared across threads when the transport allows it.
#[derive(Clone)]
pub struct OkexApi {
    api_server: String,
    api_key: String,
    secret_key: String,
    timeout: Duration,
    transport: Arc<dyn Transport>,
    event_sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for OkexApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkexApi")
            .field("api_server", &self.api_server)
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OkexApi {
    /// Create a new client with the default transport and `tracing` events.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is invalid or the HTTP client cannot be
    /// initialized.
    pub fn new(
        api_server: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        OkexApiBuilder::new(api_server, api_key, secret_key, timeout).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(
        api_server: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> OkexApiBuilder {
        OkexApiBuilder::new(api_server, api_key, secret_key, timeout)
    }

    /// Get the API server URL.
    pub fn api_server(&self) -> &str {
        &self.api_server
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Unauthenticated GET of `resource?symbol=<pair>`.
    fn http_get(&self, resource: &str, pair: &str, check_result: bool) -> ApiResult<serde_json::Value> {
        let url = format!(
            "{}{}?symbol={}",
            self.api_server,
            resource,
            urlencoding::encode(pair)
        );
        tracing::debug!(method = "GET", resource, "Sending request");

        let response = self.transport.send(HttpRequest::get(url))?;
        validate_response(response, check_result)
    }

    /// Signed POST of `params` to `resource`. The envelope is always checked.
    fn http_post(&self, resource: &str, mut params: RequestParams) -> ApiResult<serde_json::Value> {
        params.insert("api_key", self.api_key.as_str());
        let sign = create_signature(&params, &self.secret_key);
        params.insert("sign", sign);

        let url = format!("{}{}", self.api_server, resource);
        tracing::debug!(method = "POST", resource, "Sending request");

        let response = self.transport.send(HttpRequest::post_form(url, params.to_form()?))?;
        validate_response(response, true)
    }

    /// Decode a validated payload into an endpoint's wire record.
    fn decode<T: DeserializeOwned>(data: serde_json::Value) -> ApiResult<T> {
        serde_json::from_value(data)
            .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)))
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    fn validate_pair(pair: &str) -> ApiResult<()> {
        if pair.is_empty() {
            return Err(ApiError::InvalidParameter("pair cannot be empty".to_string()));
        }
        Ok(())
    }

    // =========================================================================
    // Market data endpoints
    // =========================================================================

    /// Get the latest ticker for `pair`.
    pub fn ticker(&self, pair: &str) -> ApiResult<Ticker> {
        Self::validate_pair(pair)?;
        Self::decode(self.http_get(TICKER_PATH, pair, false)?)
    }

    /// Get the order book depth for `pair`.
    pub fn depth(&self, pair: &str) -> ApiResult<Depth> {
        Self::validate_pair(pair)?;
        Self::decode(self.http_get(DEPTH_PATH, pair, false)?)
    }

    /// Get recent public trades for `pair`.
    pub fn get_all_trades(&self, pair: &str) -> ApiResult<Vec<Trade>> {
        Self::validate_pair(pair)?;
        let data = self.http_get(TRADES_PATH, pair, false)?;
        decode_trades(data, pair)
    }

    /// Own trade history is not offered by the exchange's v1 API.
    ///
    /// Always returns [`ApiError::Unsupported`]; use
    /// [`get_all_trades`](Self::get_all_trades) for the public feed.
    pub fn get_trades(&self, _pair: &str) -> ApiResult<Vec<Trade>> {
        Err(ApiError::Unsupported("get_trades"))
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Get free and locked balances per currency.
    pub fn get_balances(&self) -> ApiResult<Funds> {
        let response: UserInfoResponse = Self::decode(self.http_post(USER_INFO_PATH, RequestParams::new())?)?;
        Ok(response.info.funds)
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Get all open orders for `pair`.
    pub fn get_orders(&self, pair: &str) -> ApiResult<Vec<Order>> {
        Self::validate_pair(pair)?;

        let params = RequestParams::new()
            .with("symbol", pair)
            .with("order_id", ALL_OPEN_ORDERS);
        let response: OrdersResponse = Self::decode(self.http_post(ORDER_INFO_PATH, params)?)?;

        decode_orders(response.orders.into_iter().filter(is_plain_order).collect())
    }

    /// Get up to `number_of_orders` completed orders for `pair`.
    ///
    /// Pages of [`ORDER_HISTORY_PAGE_LENGTH`] rows are fetched from page 1
    /// until a page comes back empty or short, enough orders are collected,
    /// or [`ORDER_HISTORY_MAX_PAGES`] pages have been read. Results keep the
    /// exchange's page order. A failing page fails the whole call.
    pub fn get_orders_history(&self, pair: &str, number_of_orders: usize) -> ApiResult<Vec<Order>> {
        Self::validate_pair(pair)?;

        let mut rows = Vec::new();
        for page in 1..=ORDER_HISTORY_MAX_PAGES {
            let params = RequestParams::new()
                .with("symbol", pair)
                .with("status", ORDER_STATUS_COMPLETED)
                .with("current_page", page)
                .with("page_length", ORDER_HISTORY_PAGE_LENGTH);
            let response: OrdersResponse = Self::decode(self.http_post(ORDER_HISTORY_PATH, params)?)?;

            let page_rows = response.orders.len();
            rows.extend(response.orders.into_iter().filter(is_plain_order));

            if page_rows == 0
                || page_rows < ORDER_HISTORY_PAGE_LENGTH as usize
                || rows.len() >= number_of_orders
            {
                break;
            }
        }

        rows.truncate(number_of_orders);
        decode_orders(rows)
    }

    /// Place a limit order and return the exchange-assigned order id.
    ///
    /// Price and amount travel as floats, as the trade endpoint requires.
    pub fn place_order(
        &self,
        pair: &str,
        is_sell: bool,
        price: Decimal,
        amount: Decimal,
    ) -> ApiResult<u64> {
        Self::validate_pair(pair)?;

        let side = Side::from_is_sell(is_sell);
        self.event_sink.emit(&ApiEvent::PlacingOrder {
            pair: pair.to_string(),
            side,
            price,
            amount,
        });

        let params = RequestParams::new()
            .with("symbol", pair)
            .with("type", side.as_str())
            .with("price", decimal_to_f64(&price))
            .with("amount", decimal_to_f64(&amount));
        let response: PlaceOrderResponse = Self::decode(self.http_post(TRADE_PATH, params)?)?;

        self.event_sink.emit(&ApiEvent::PlacedOrder {
            pair: pair.to_string(),
            side,
            price,
            amount,
            order_id: response.order_id,
        });

        Ok(response.order_id)
    }

    /// Cancel an order.
    ///
    /// Returns `Ok(false)` when the exchange answers for a different order id;
    /// that outcome is not an error.
    pub fn cancel_order(&self, pair: &str, order_id: u64) -> ApiResult<bool> {
        Self::validate_pair(pair)?;

        self.event_sink.emit(&ApiEvent::CancellingOrder { order_id });

        let params = RequestParams::new()
            .with("symbol", pair)
            .with("order_id", order_id);
        let response: CancelOrderResponse = Self::decode(self.http_post(CANCEL_ORDER_PATH, params)?)?;

        let success = response.order_id == order_id;
        if success {
            self.event_sink.emit(&ApiEvent::CancelledOrder { order_id });
        } else {
            self.event_sink.emit(&ApiEvent::CancelFailed { order_id });
        }

        Ok(success)
    }
}
