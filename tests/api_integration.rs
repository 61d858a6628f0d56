//! Integration tests for the OKEx REST API client.
//!
//! These tests drive the public client through a scripted transport: every
//! request is captured and answered from a queue of canned responses, so no
//! network access is needed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use okex_sdk::api::*;
use okex_sdk::shared::Side;
use rust_decimal_macros::dec;
use serde_json::json;

// =============================================================================
// Scripted transport
// =============================================================================

#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn respond(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
    }

    fn respond_json(&self, body: serde_json::Value) {
        self.respond(200, body.to_string());
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no scripted response left".to_string()))
    }
}

fn client(transport: &Arc<ScriptedTransport>) -> (OkexApi, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let api = OkexApi::builder("https://www.okex.com/", "key", "secret", Duration::from_secs(5))
        .transport(transport.clone())
        .event_sink(sink.clone())
        .build()
        .unwrap();
    (api, sink)
}

/// Value of `name` in a form-encoded body.
fn form_value(body: &str, name: &str) -> Option<String> {
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

fn order_row(order_id: u64, order_type: &str) -> serde_json::Value {
    json!({
        "order_id": order_id,
        "create_date": 1514764800000i64 + order_id as i64,
        "symbol": "btc_usd",
        "type": order_type,
        "price": 6500.5,
        "amount": "0.5",
        "deal_amount": 0.25,
        "status": 2
    })
}

fn orders_page(start_id: u64, count: usize, order_type: &str) -> serde_json::Value {
    let orders: Vec<_> = (0..count as u64)
        .map(|i| order_row(start_id + i, order_type))
        .collect();
    json!({ "result": true, "orders": orders })
}

// =============================================================================
// Market data
// =============================================================================

mod market_data {
    use super::*;

    #[test]
    fn test_ticker_uses_public_get() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({
            "date": "1514764800",
            "ticker": {
                "buy": "6500.1", "sell": "6500.9", "high": "6700",
                "low": "6300", "last": "6500.5", "vol": "1234.5"
            }
        }));
        let (api, _) = client(&transport);

        let ticker = api.ticker("btc_usd").unwrap();
        assert_eq!(ticker.date, 1514764800);
        assert_eq!(ticker.ticker.last, dec!(6500.5));
        assert_eq!(ticker.ticker.vol, dec!(1234.5));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "https://www.okex.com/api/v1/ticker.do?symbol=btc_usd");
        assert!(requests[0].body.is_none());
    }

    #[test]
    fn test_depth_levels() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({
            "asks": [[6501.0, 1.5], [6500.5, 0.2]],
            "bids": [[6499.0, 3], ["6498.5", "0.75"]]
        }));
        let (api, _) = client(&transport);

        let depth = api.depth("btc_usd").unwrap();
        assert_eq!(depth.asks.len(), 2);
        assert_eq!(depth.asks[1].price, dec!(6500.5));
        assert_eq!(depth.bids[1].amount, dec!(0.75));
        assert!(transport.requests()[0].url.ends_with("/api/v1/depth.do?symbol=btc_usd"));
    }

    #[test]
    fn test_public_trades() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!([
            { "tid": 7, "date": 1514764800, "type": "sell", "price": 100, "amount": 1 },
            { "tid": "8", "date": "1514764801", "type": "buy", "price": "100.5", "amount": "0.3" }
        ]));
        let (api, _) = client(&transport);

        let trades = api.get_all_trades("BTC_usd").unwrap();
        assert_eq!(trades.len(), 2);

        assert_eq!(trades[0].trade_id(), 7);
        assert_eq!(trades[0].timestamp(), 1514764800);
        assert!(trades[0].is_sell());
        assert_eq!(trades[0].amount_symbol(), "btc");

        assert_eq!(trades[1].trade_id(), 8);
        assert_eq!(trades[1].side(), Side::Buy);
        assert_eq!(trades[1].price(), dec!(100.5));

        assert!(transport.requests()[0].url.ends_with("/api/v1/trades.do?symbol=BTC_usd"));
    }

    #[test]
    fn test_public_get_ignores_result_flag() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": false, "asks": [], "bids": [] }));
        let (api, _) = client(&transport);

        let depth = api.depth("btc_usd").unwrap();
        assert!(depth.asks.is_empty());
    }

    #[test]
    fn test_own_trades_unsupported_for_any_pair() {
        let transport = ScriptedTransport::new();
        let (api, _) = client(&transport);

        for pair in ["btc_usd", "ltc_usd", ""] {
            let err = api.get_trades(pair).unwrap_err();
            assert!(matches!(err, ApiError::Unsupported("get_trades")));
            assert_eq!(err.to_string(), "get_trades() is not available for OKEX");
        }
        assert_eq!(transport.request_count(), 0);
    }
}

// =============================================================================
// Account
// =============================================================================

mod account {
    use super::*;

    #[test]
    fn test_balances_from_user_info() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({
            "result": true,
            "info": {
                "funds": {
                    "free": { "btc": "1.5", "usd": "250.25" },
                    "freezed": { "btc": "0.5", "usd": 0 }
                }
            }
        }));
        let (api, _) = client(&transport);

        let funds = api.get_balances().unwrap();
        assert_eq!(funds.free_balance("btc"), dec!(1.5));
        assert_eq!(funds.free_balance("usd"), dec!(250.25));
        assert_eq!(funds.locked_balance("btc"), dec!(0.5));
        assert_eq!(funds.locked_balance("ltc"), dec!(0));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://www.okex.com/api/v1/userinfo.do");

        let body = request.body.as_deref().unwrap();
        assert_eq!(form_value(body, "api_key").as_deref(), Some("key"));
        let expected = create_signature(&RequestParams::new().with("api_key", "key"), "secret");
        assert_eq!(form_value(body, "sign"), Some(expected));
    }

    #[test]
    fn test_error_code_rejects_private_call() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": false, "error_code": 10005 }));
        let (api, _) = client(&transport);

        let err = api.get_balances().unwrap_err();
        assert!(matches!(err, ApiError::Rejected(Rejection::ErrorCode(_))));
        assert_eq!(err.error_code(), Some("10005"));
    }

    #[test]
    fn test_missing_result_rejects_private_call() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "info": { "funds": { "free": {}, "freezed": {} } } }));
        let (api, _) = client(&transport);

        let err = api.get_balances().unwrap_err();
        assert!(matches!(err, ApiError::Rejected(Rejection::NegativeResult(_))));
    }

    #[test]
    fn test_http_status_error() {
        let transport = ScriptedTransport::new();
        transport.respond(503, "upstream down");
        let (api, _) = client(&transport);

        match api.get_balances().unwrap_err() {
            ApiError::HttpStatus { status, reason } => {
                assert_eq!(status, 503);
                assert_eq!(reason, "Service Unavailable");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_json_body() {
        let transport = ScriptedTransport::new();
        transport.respond(200, "<html>maintenance</html>");
        let (api, _) = client(&transport);

        assert!(matches!(api.get_balances(), Err(ApiError::Deserialize(_))));
    }
}

// =============================================================================
// Orders
// =============================================================================

mod orders {
    use super::*;

    #[test]
    fn test_open_orders_keep_plain_limit_orders() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({
            "result": true,
            "orders": [
                order_row(1, "buy"),
                order_row(2, "sell_market"),
                { "order_id": 3, "type": "buy_market" },
                order_row(4, "sell")
            ]
        }));
        let (api, _) = client(&transport);

        let orders = api.get_orders("btc_usd").unwrap();
        assert_eq!(orders.len(), 2);

        assert_eq!(orders[0].order_id(), 1);
        assert!(!orders[0].is_sell());
        assert_eq!(orders[0].timestamp(), 1514764800);
        assert_eq!(orders[0].price(), dec!(6500.5));
        assert_eq!(orders[0].amount(), dec!(0.5));
        assert_eq!(orders[0].deal_amount(), dec!(0.25));

        assert_eq!(orders[1].order_id(), 4);
        assert!(orders[1].is_sell());

        let body = transport.requests()[0].body.clone().unwrap();
        assert!(transport.requests()[0].url.ends_with("/api/v1/order_info.do"));
        assert_eq!(form_value(&body, "order_id").as_deref(), Some("-1"));
        assert_eq!(form_value(&body, "symbol").as_deref(), Some("btc_usd"));
    }

    #[test]
    fn test_place_order_request_and_events() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": true, "order_id": 99 }));
        let (api, sink) = client(&transport);

        let order_id = api
            .place_order("btc_usd", true, dec!(6500.5), dec!(0.25))
            .unwrap();
        assert_eq!(order_id, 99);

        let request = &transport.requests()[0];
        assert!(request.url.ends_with("/api/v1/trade.do"));
        let body = request.body.as_deref().unwrap();
        assert_eq!(form_value(body, "type").as_deref(), Some("sell"));
        assert_eq!(form_value(body, "price").as_deref(), Some("6500.5"));
        assert_eq!(form_value(body, "amount").as_deref(), Some("0.25"));

        let sign = form_value(body, "sign").unwrap();
        assert_eq!(sign.len(), 32);
        assert!(sign.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        let signed = RequestParams::new()
            .with("symbol", "btc_usd")
            .with("type", "sell")
            .with("price", 6500.5f64)
            .with("amount", 0.25f64)
            .with("api_key", "key");
        assert_eq!(sign, create_signature(&signed, "secret"));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            ApiEvent::PlacingOrder {
                pair: "btc_usd".to_string(),
                side: Side::Sell,
                price: dec!(6500.5),
                amount: dec!(0.25),
            }
        );
        assert!(matches!(events[1], ApiEvent::PlacedOrder { order_id: 99, .. }));
    }

    #[test]
    fn test_whole_price_sent_as_float() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": true, "order_id": "12" }));
        let (api, _) = client(&transport);

        assert_eq!(api.place_order("btc_usd", false, dec!(100), dec!(1)).unwrap(), 12);

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(form_value(&body, "type").as_deref(), Some("buy"));
        assert_eq!(form_value(&body, "price").as_deref(), Some("100.0"));
    }

    #[test]
    fn test_rejected_placement_emits_only_placing() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": false, "error_code": 1002 }));
        let (api, sink) = client(&transport);

        assert!(api.place_order("btc_usd", true, dec!(1), dec!(1)).is_err());
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ApiEvent::PlacingOrder { .. }));
    }

    #[test]
    fn test_cancel_order_success() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": true, "order_id": "42" }));
        let (api, sink) = client(&transport);

        assert!(api.cancel_order("btc_usd", 42).unwrap());

        let body = transport.requests()[0].body.clone().unwrap();
        assert!(transport.requests()[0].url.ends_with("/api/v1/cancel_order.do"));
        assert_eq!(form_value(&body, "order_id").as_deref(), Some("42"));
        assert_eq!(
            sink.events(),
            vec![
                ApiEvent::CancellingOrder { order_id: 42 },
                ApiEvent::CancelledOrder { order_id: 42 },
            ]
        );
    }

    #[test]
    fn test_cancel_order_mismatch_is_not_an_error() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": true, "order_id": 43 }));
        let (api, sink) = client(&transport);

        assert!(!api.cancel_order("btc_usd", 42).unwrap());
        assert_eq!(
            sink.events(),
            vec![
                ApiEvent::CancellingOrder { order_id: 42 },
                ApiEvent::CancelFailed { order_id: 42 },
            ]
        );
    }
}

// =============================================================================
// Order history pagination
// =============================================================================

mod order_history {
    use super::*;

    fn script_pages(transport: &ScriptedTransport) {
        transport.respond_json(orders_page(1, 200, "sell"));
        transport.respond_json(orders_page(201, 200, "buy"));
        transport.respond_json(orders_page(401, 10, "sell"));
    }

    #[test]
    fn test_stops_once_enough_orders_collected() {
        let transport = ScriptedTransport::new();
        script_pages(&transport);
        let (api, _) = client(&transport);

        let orders = api.get_orders_history("btc_usd", 50).unwrap();
        assert_eq!(orders.len(), 50);
        assert_eq!(orders[0].order_id(), 1);
        assert_eq!(orders[49].order_id(), 50);
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_stops_on_short_page() {
        let transport = ScriptedTransport::new();
        script_pages(&transport);
        let (api, _) = client(&transport);

        let orders = api.get_orders_history("btc_usd", 1000).unwrap();
        assert_eq!(orders.len(), 410);
        assert_eq!(orders[409].order_id(), 410);
        assert_eq!(transport.request_count(), 3);

        let pages: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| form_value(r.body.as_deref().unwrap(), "current_page").unwrap())
            .collect();
        assert_eq!(pages, vec!["1", "2", "3"]);

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(form_value(&body, "status").as_deref(), Some("100"));
        assert_eq!(form_value(&body, "page_length").as_deref(), Some("200"));
    }

    #[test]
    fn test_empty_first_page() {
        let transport = ScriptedTransport::new();
        transport.respond_json(json!({ "result": true, "orders": [] }));
        let (api, _) = client(&transport);

        assert!(api.get_orders_history("btc_usd", 10).unwrap().is_empty());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_count_reached_on_later_page_after_filtered_rows() {
        let transport = ScriptedTransport::new();
        let first_page: Vec<_> = (1..=200u64)
            .map(|id| order_row(id, if id <= 30 { "sell" } else { "buy_market" }))
            .collect();
        transport.respond_json(json!({ "result": true, "orders": first_page }));
        transport.respond_json(orders_page(201, 200, "buy"));
        transport.respond_json(orders_page(401, 200, "sell"));
        let (api, _) = client(&transport);

        let orders = api.get_orders_history("btc_usd", 50).unwrap();
        assert_eq!(orders.len(), 50);
        assert_eq!(transport.request_count(), 2);

        assert!(orders[..30].iter().all(|o| o.is_sell()));
        assert_eq!(orders[29].order_id(), 30);
        assert_eq!(orders[30].order_id(), 201);
        assert_eq!(orders[49].order_id(), 220);
        assert!(orders[30..].iter().all(|o| !o.is_sell()));
    }

    #[test]
    fn test_page_cap_when_rows_are_filtered_out() {
        let transport = ScriptedTransport::new();
        for page in 0..ORDER_HISTORY_MAX_PAGES as u64 {
            transport.respond_json(orders_page(page * 200 + 1, 200, "buy_market"));
        }
        let (api, _) = client(&transport);

        let orders = api.get_orders_history("btc_usd", 10).unwrap();
        assert!(orders.is_empty());
        assert_eq!(transport.request_count(), ORDER_HISTORY_MAX_PAGES as usize);
    }

    #[test]
    fn test_failing_page_fails_the_call() {
        let transport = ScriptedTransport::new();
        transport.respond_json(orders_page(1, 200, "sell"));
        transport.respond_json(json!({ "result": false, "error_code": 10008 }));
        let (api, _) = client(&transport);

        let err = api.get_orders_history("btc_usd", 1000).unwrap_err();
        assert_eq!(err.error_code(), Some("10008"));
        assert_eq!(transport.request_count(), 2);
    }

    #[test]
    fn test_zero_requested_orders_fetches_one_page() {
        let transport = ScriptedTransport::new();
        script_pages(&transport);
        let (api, _) = client(&transport);

        assert!(api.get_orders_history("btc_usd", 0).unwrap().is_empty());
        assert_eq!(transport.request_count(), 1);
    }
}
