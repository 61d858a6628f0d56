//! Request signing for private endpoints.
//!
//! The v1 API authenticates a POST by a `sign` parameter:
//! `UPPER_HEX(MD5("k1=v1&k2=v2&...&secret_key=<secret>"))`, keys in byte
//! order. MD5 is what the exchange verifies against; it is not a choice.

use md5::{Digest, Md5};
use std::collections::BTreeMap;

use crate::api::error::{ApiError, ApiResult};

/// A primitive request parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::UInt(u) => write!(f, "{}", u),
            ParamValue::Float(v) => f.write_str(&render_float(*v)),
        }
    }
}

/// Float text as the exchange's reference clients send it: shortest
/// round-trip digits, a fractional part on whole numbers (`1.0`), and a signed
/// exponent of at least two digits (`1e-05`, `1e+16`).
fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u64> for ParamValue {
    fn from(u: u64) -> Self {
        ParamValue::UInt(u)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// Request parameters, kept sorted by key in byte order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(BTreeMap<String, ParamValue>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(key, rendered value)` pairs in key order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Form-urlencoded body of all parameters.
    pub fn to_form(&self) -> ApiResult<String> {
        serde_urlencoded::to_string(self.pairs())
            .map_err(|e| ApiError::InvalidParameter(format!("cannot form-encode parameters: {}", e)))
    }
}

/// Compute the `sign` value for `params` under `secret_key`.
///
/// Pure and deterministic: the result is 32 uppercase hex characters and does
/// not depend on the order parameters were inserted in.
pub fn create_signature(params: &RequestParams, secret_key: &str) -> String {
    let mut payload = String::new();
    for (key, value) in &params.0 {
        payload.push_str(key);
        payload.push('=');
        payload.push_str(&value.to_string());
        payload.push('&');
    }
    payload.push_str("secret_key=");
    payload.push_str(secret_key);

    let digest = Md5::digest(payload.as_bytes());
    hex::encode_upper(digest)
}
