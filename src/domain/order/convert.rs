//! Conversions: order wire rows → Order domain records.

use super::wire::OrderRow;
use super::Order;
use crate::api::error::{ApiError, ApiResult};
use crate::shared::{millis_to_seconds, Side};

impl TryFrom<OrderRow> for Order {
    type Error = ApiError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let side = Side::from_wire(&row.order_type).ok_or_else(|| {
            ApiError::Deserialize(format!(
                "order {} has unsupported type '{}'",
                row.order_id, row.order_type
            ))
        })?;

        Ok(Order::new(
            row.order_id,
            millis_to_seconds(row.create_date),
            row.symbol,
            side.is_sell(),
            row.price,
            row.amount,
            row.deal_amount,
        ))
    }
}

/// Whether a raw row is a plain buy or sell order.
///
/// The exchange mixes in rows with other `type` markers; those are skipped.
pub(crate) fn is_plain_order(row: &serde_json::Value) -> bool {
    row.get("type")
        .and_then(serde_json::Value::as_str)
        .and_then(Side::from_wire)
        .is_some()
}

/// Decode already-filtered raw rows into orders, failing on the first bad row.
pub(crate) fn decode_orders(rows: Vec<serde_json::Value>) -> ApiResult<Vec<Order>> {
    rows.into_iter()
        .map(|row| {
            let row: OrderRow = serde_json::from_value(row)
                .map_err(|e| ApiError::Deserialize(format!("Failed to decode order row: {}", e)))?;
            Order::try_from(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn sample_row() -> serde_json::Value {
        json!({
            "order_id": 10_000_591,
            "create_date": 1_418_113_235_000i64,
            "symbol": "btc_usd",
            "type": "sell",
            "price": 6543.21,
            "amount": "0.1",
            "deal_amount": 0,
            "avg_price": 0,
            "status": 0
        })
    }

    #[test]
    fn test_order_row_conversion() {
        let orders = decode_orders(vec![sample_row()]).unwrap();
        assert_eq!(orders.len(), 1);

        let order = &orders[0];
        assert_eq!(order.order_id(), 10_000_591);
        assert_eq!(order.timestamp(), 1_418_113_235);
        assert_eq!(order.pair(), "btc_usd");
        assert!(order.is_sell());
        assert_eq!(order.price(), Decimal::new(654321, 2));
        assert_eq!(order.amount(), Decimal::new(1, 1));
        assert_eq!(order.deal_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_buy_row_is_not_sell() {
        let mut row = sample_row();
        row["type"] = json!("buy");
        let orders = decode_orders(vec![row]).unwrap();
        assert!(!orders[0].is_sell());
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let mut row = sample_row();
        row.as_object_mut().unwrap().remove("deal_amount");
        let err = decode_orders(vec![row]).unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }

    #[test]
    fn test_plain_order_filter() {
        assert!(is_plain_order(&json!({"type": "buy"})));
        assert!(is_plain_order(&json!({"type": "sell"})));
        assert!(!is_plain_order(&json!({"type": "buy_market"})));
        assert!(!is_plain_order(&json!({"type": 1})));
        assert!(!is_plain_order(&json!({"order_id": 3})));
    }
}
