//! Shared utilities used across the API and domain modules.

pub mod numeric;
pub mod serde_util;
pub mod types;

// Re-export commonly used items
pub use numeric::{
    decimal_from_number, decimal_to_f64, format_decimal, millis_to_seconds, parse_decimal,
};
pub use types::*;
