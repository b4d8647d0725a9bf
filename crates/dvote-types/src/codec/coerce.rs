//! Lossy stringification applied by the permissive JSON parser.
//!
//! The output is what an ECMAScript `String(value)` call produces, so every
//! implementation of the schema reads loosely typed input the same way.
//!
//! | input | output |
//! |---|---|
//! | string | unchanged |
//! | `true` / `false` | `"true"` / `"false"` |
//! | `null` | `"null"` |
//! | integer | decimal digits, full precision |
//! | float, `1e-6 <= |x| < 1e21` | shortest round-trip decimal (`1.0` → `"1"`, `0.5` → `"0.5"`) |
//! | any other float | shortest round-trip exponent form (`1e21` → `"1e+21"`, `1.5e-7` → `"1.5e-7"`) |
//! | `0.0` / `-0.0` | `"0"` |
//! | array | elements coerced and joined with `,`, `null` elements as `""` |
//! | object | `"[object Object]"` |

use serde_json::{Number, Value};

/// Converts any JSON value to the string a loosely typed field accepts.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), float_to_string)
}

fn float_to_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_owned();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
