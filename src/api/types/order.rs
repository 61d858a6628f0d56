//! Order submission types for the OKEx REST API.

use crate::shared::serde_util::lenient_u64;
use serde::{Deserialize, Serialize};

/// Response for POST /api/v1/trade.do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    /// Exchange-assigned order id
    #[serde(deserialize_with = "lenient_u64::deserialize")]
    pub order_id: u64,
}

/// Response for POST /api/v1/cancel_order.do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    /// Id of the order the exchange cancelled
    #[serde(deserialize_with = "lenient_u64::deserialize")]
    pub order_id: u64,
}
