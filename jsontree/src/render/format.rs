//! Scalar formatting shared by the renderer and serializer.

use crate::model::json_number;

/// Locale-independent shortest decimal for a double.
///
/// Integral values print without a fraction (`85`, `-0.0` → `0`), others use
/// the shortest string that parses back to the same double (`2.4`, `1e300`).
/// Values without a JSON form print as `NaN`, `Infinity` or `-Infinity`.
pub fn format_number(n: f64) -> String {
    match json_number(n) {
        Some(number) => number.to_string(),
        None if n.is_nan() => "NaN".to_string(),
        None if n.is_sign_positive() => "Infinity".to_string(),
        None => "-Infinity".to_string(),
    }
}

/// Double-quoted string with standard JSON escaping.
pub fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
