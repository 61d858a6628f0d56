//! Account types for the OKEx REST API (`userinfo.do`).

use crate::shared::serde_util::lenient_decimal_map;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Balances per currency (`info.funds`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funds {
    /// Available balance per lowercase currency symbol
    #[serde(deserialize_with = "lenient_decimal_map::deserialize")]
    pub free: BTreeMap<String, Decimal>,
    /// Balance locked in open orders
    #[serde(deserialize_with = "lenient_decimal_map::deserialize")]
    pub freezed: BTreeMap<String, Decimal>,
}

impl Funds {
    /// Available balance of `symbol`, zero when the exchange did not list it.
    pub fn free_balance(&self, symbol: &str) -> Decimal {
        self.free.get(symbol).copied().unwrap_or_default()
    }

    /// Locked balance of `symbol`, zero when the exchange did not list it.
    pub fn locked_balance(&self, symbol: &str) -> Decimal {
        self.freezed.get(symbol).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserInfo {
    pub funds: Funds,
}

/// Response for POST /api/v1/userinfo.do.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserInfoResponse {
    pub info: UserInfo,
}
