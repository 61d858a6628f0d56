//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: The immutable domain record and its identity rules
//! - `wire.rs`: Raw serde rows matching exchange responses
//! - `convert.rs`: Conversions from wire rows into domain records

pub mod order;
pub mod trade;
