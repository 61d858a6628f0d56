//! Order domain: resting and historical exchange orders.

mod convert;
pub mod wire;

use crate::shared::Side;
use rust_decimal::Decimal;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub(crate) use convert::{decode_orders, is_plain_order};

// ─── Order ───────────────────────────────────────────────────────────────────

/// An exchange order.
///
/// Orders are immutable snapshots: a changed order state is represented by a
/// newly fetched `Order`. Two orders are equal when their `order_id` and
/// `pair` match, whatever their prices or amounts.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    order_id: u64,
    timestamp: i64,
    pair: String,
    is_sell: bool,
    price: Decimal,
    amount: Decimal,
    deal_amount: Decimal,
}

impl Order {
    pub fn new(
        order_id: u64,
        timestamp: i64,
        pair: impl Into<String>,
        is_sell: bool,
        price: Decimal,
        amount: Decimal,
        deal_amount: Decimal,
    ) -> Self {
        Self {
            order_id,
            timestamp,
            pair: pair.into(),
            is_sell,
            price,
            amount,
            deal_amount,
        }
    }

    pub fn order_id(&self) -> u64 {
        self.order_id
    }

    /// Creation time in epoch seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn pair(&self) -> &str {
        &self.pair
    }

    pub fn is_sell(&self) -> bool {
        self.is_sell
    }

    pub fn side(&self) -> Side {
        Side::from_is_sell(self.is_sell)
    }

    /// Price in quote currency per unit of base currency.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Order quantity in base currency.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Quantity already filled, in base currency.
    pub fn deal_amount(&self) -> Decimal {
        self.deal_amount
    }

    pub fn sell_to_buy_price(&self) -> Decimal {
        self.price
    }

    pub fn buy_to_sell_price(&self) -> Decimal {
        self.price
    }

    /// Amount still to be filled, expressed in what the order sells.
    ///
    /// Sell orders sell base currency, so this is `amount - deal_amount`.
    /// Buy orders sell quote currency, so the unfilled base quantity is
    /// multiplied by `price`.
    ///
    /// Returns `None` when the result does not fit in a [`Decimal`].
    pub fn remaining_sell_amount(&self) -> Option<Decimal> {
        let remaining = self.amount.checked_sub(self.deal_amount)?;
        if self.is_sell {
            Some(remaining)
        } else {
            remaining.checked_mul(self.price)
        }
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id && self.pair == other.pair
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_id.hash(state);
        self.pair.hash(state);
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order #{} ({} {} of {}, price {}, filled {}, at {})",
            self.order_id,
            self.side(),
            self.amount,
            self.pair,
            self.price,
            self.deal_amount,
            self.timestamp
        )
    }
}
