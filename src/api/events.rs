//! Order lifecycle events.
//!
//! The client reports what it does to orders through an injected
//! [`EventSink`] instead of writing to a global logger. [`TracingSink`]
//! forwards to `tracing`; [`RecordingSink`] keeps events in memory.

use rust_decimal::Decimal;
use std::sync::Mutex;

use crate::shared::Side;

/// Something the client did to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    PlacingOrder {
        pair: String,
        side: Side,
        price: Decimal,
        amount: Decimal,
    },
    PlacedOrder {
        pair: String,
        side: Side,
        price: Decimal,
        amount: Decimal,
        order_id: u64,
    },
    CancellingOrder {
        order_id: u64,
    },
    CancelledOrder {
        order_id: u64,
    },
    CancelFailed {
        order_id: u64,
    },
}

impl std::fmt::Display for ApiEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiEvent::PlacingOrder {
                pair,
                side,
                price,
                amount,
            } => write!(f, "Placing order ({}, amount {} of {}, price {})...", side, amount, pair, price),
            ApiEvent::PlacedOrder {
                pair,
                side,
                price,
                amount,
                order_id,
            } => write!(
                f,
                "Placed order ({}, amount {} of {}, price {}) as #{}",
                side, amount, pair, price, order_id
            ),
            ApiEvent::CancellingOrder { order_id } => write!(f, "Cancelling order #{}...", order_id),
            ApiEvent::CancelledOrder { order_id } => write!(f, "Cancelled order #{}", order_id),
            ApiEvent::CancelFailed { order_id } => write!(f, "Failed to cancel order #{}", order_id),
        }
    }
}

/// Receiver of [`ApiEvent`]s. Advisory only: sinks cannot fail a call.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &ApiEvent);
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ApiEvent) {
        tracing::info!("{}", event);
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ApiEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<ApiEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &ApiEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
