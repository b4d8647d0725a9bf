//! Construction from partial objects.

use serde_json::Value;

use crate::schema::Message;

use super::json::{merge_json, Conversion};

/// Builds a fresh record from an object where any subset of fields (at any
/// depth) may be present.
///
/// Values are taken as already typed: strings must be JSON strings, and a
/// value of any other shape is treated as absent instead of being coerced.
/// Map entries whose value is `null` are dropped.
///
/// In Rust code the same effect is usually had with struct update syntax
/// over `Default::default()`; this entry point serves callers that hold
/// partial data as a JSON tree.
pub fn from_partial<M: Message + Default>(value: &Value) -> M {
    let mut msg = M::default();
    merge_json(&mut msg, value, Conversion::Exact);
    msg
}
