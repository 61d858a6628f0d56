//! Network URL constants for the OKEx SDK.

/// Public REST API host of OKEx.
pub const DEFAULT_API_URL: &str = "https://www.okex.com";

/// Public REST API host of OKCoin, which serves the same v1 API.
pub const OKCOIN_API_URL: &str = "https://www.okcoin.com";
