//! Numeric and time normalization for wire values.
//!
//! The exchange emits prices and amounts as JSON integers, JSON floats or
//! numeric strings, sometimes all three within one response. Everything is
//! normalized into [`Decimal`] by re-parsing the shortest textual form of the
//! source value, so no precision is lost beyond what the exchange sent.

use rust_decimal::prelude::*;

/// Milliseconds per second, used for `create_date` style timestamps.
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Parse a decimal from its textual wire form.
///
/// Accepts plain (`"0.25"`, `"-3"`) and scientific (`"1e-7"`, `"2.5E+3"`)
/// notation, with surrounding whitespace ignored. Values finer than the
/// 28 fractional digits a [`Decimal`] holds are rounded, not rejected.
///
/// # Example
///
/// ```
/// use okex_sdk::shared::parse_decimal;
///
/// assert_eq!(parse_decimal("0.25").unwrap().to_string(), "0.25");
/// assert_eq!(parse_decimal("1e-3").unwrap().to_string(), "0.001");
/// ```
pub fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty decimal string".to_string());
    }

    if let Some((mantissa, exponent)) = trimmed.split_once(['e', 'E']) {
        return Decimal::from_scientific(trimmed)
            .or_else(|_| scale_by_power_of_ten(mantissa, exponent))
            .map_err(|e| format!("invalid decimal '{}': {}", raw, e));
    }

    Decimal::from_str(trimmed).map_err(|e| format!("invalid decimal '{}': {}", raw, e))
}

/// `mantissa * 10^exponent`, one digit shift at a time so that division
/// rounds at the last representable place.
fn scale_by_power_of_ten(mantissa: &str, exponent: &str) -> Result<Decimal, String> {
    let mut value = Decimal::from_str(mantissa).map_err(|e| e.to_string())?;
    let exponent: i64 = exponent.parse().map_err(|_| "invalid exponent".to_string())?;

    if exponent >= 0 {
        for _ in 0..exponent {
            value = value
                .checked_mul(Decimal::TEN)
                .ok_or_else(|| "value out of range".to_string())?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            if value.is_zero() {
                break;
            }
            value = value
                .checked_div(Decimal::TEN)
                .ok_or_else(|| "value out of range".to_string())?;
        }
    }

    Ok(value)
}

/// Normalize a JSON number into a decimal.
///
/// `serde_json` renders floats with the shortest representation that
/// round-trips, so `0.1` stays `0.1` rather than its binary expansion.
pub fn decimal_from_number(number: &serde_json::Number) -> Result<Decimal, String> {
    if let Some(i) = number.as_i64() {
        return Ok(Decimal::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Ok(Decimal::from(u));
    }
    parse_decimal(&number.to_string())
}

/// Canonical string form of a decimal: normalized, without trailing zeros.
pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

/// Convert a decimal into the float sent on the wire for order submission.
///
/// The v1 trade endpoint takes floats; the precision loss is part of the
/// wire format.
pub fn decimal_to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Convert a millisecond epoch timestamp into epoch seconds.
///
/// Truncates toward zero, the same way the exchange's own clients do.
pub fn millis_to_seconds(millis: i64) -> i64 {
    millis / MILLIS_PER_SECOND
}
