//! Conversions: trade wire rows → Trade domain records.

use super::wire::TradeRow;
use super::Trade;
use crate::api::error::{ApiError, ApiResult};
use crate::shared::base_symbol;

impl Trade {
    /// Build a trade from a feed row of `pair`.
    ///
    /// The feed's `date` is carried over as-is; unlike order timestamps it is
    /// not rescaled.
    pub(crate) fn from_row(row: TradeRow, pair: &str) -> Self {
        Trade::new(
            row.tid,
            row.date,
            row.trade_type == "sell",
            row.price,
            row.amount,
            base_symbol(pair),
        )
    }
}

/// Decode the bare trade array returned for `pair`.
pub(crate) fn decode_trades(payload: serde_json::Value, pair: &str) -> ApiResult<Vec<Trade>> {
    let rows: Vec<TradeRow> = serde_json::from_value(payload)
        .map_err(|e| ApiError::Deserialize(format!("Failed to decode trades: {}", e)))?;

    Ok(rows.into_iter().map(|row| Trade::from_row(row, pair)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_trade_feed_conversion() {
        let payload = json!([
            {"date": 1367130137, "date_ms": 1367130137000i64, "price": 787.71, "amount": 0.003, "tid": 230433, "type": "sell"},
            {"date": "1367130138", "price": "787.75", "amount": "0.05", "tid": "230434", "type": "buy"}
        ]);

        let trades = decode_trades(payload, "BTC_usd").unwrap();
        assert_eq!(trades.len(), 2);

        assert_eq!(
            trades[0],
            Trade::new(230433, 1367130137, true, Decimal::new(78771, 2), Decimal::new(3, 3), "btc")
        );
        assert_eq!(trades[1].trade_id(), 230434);
        assert_eq!(trades[1].timestamp(), 1367130138);
        assert!(!trades[1].is_sell());
        assert_eq!(trades[1].amount_symbol(), "btc");
    }

    #[test]
    fn test_timestamp_is_not_rescaled() {
        let payload = json!([{"date": 1367130137000i64, "price": 1, "amount": 1, "tid": 1, "type": "buy"}]);
        let trades = decode_trades(payload, "btc_usd").unwrap();
        assert_eq!(trades[0].timestamp(), 1367130137000);
    }

    #[test]
    fn test_enveloped_payload_is_decode_error() {
        let payload = json!({"result": true, "trades": []});
        let err = decode_trades(payload, "btc_usd").unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }
}
