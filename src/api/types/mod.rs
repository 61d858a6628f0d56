//! API response types for the OKEx REST API.
//!
//! Order and trade rows live with their domain records under
//! [`crate::domain`]; this module holds the remaining endpoint payloads.

pub mod account;
pub mod market;
pub mod order;
pub mod orderbook;

// Re-export all types for convenience
pub use account::Funds;
pub use market::*;
pub use order::*;
pub use orderbook::*;
