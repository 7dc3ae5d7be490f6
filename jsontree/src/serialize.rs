//! Canonical text serialization for the copy action.

use std::io::Write;

use crate::model::Value;

/// Serializes the whole document with 2-space indentation.
///
/// Collapse state plays no part: the complete structure is always written.
/// Keys keep insertion order. Empty containers are written as `[]` / `{}`,
/// non-empty ones span multiple lines. NaN and infinities have no JSON form
/// and are written as `null`. There is no trailing newline.
///
/// ```
/// use jsontree::model::Value;
/// use jsontree::serialize::to_pretty_string;
///
/// let value = Value::from_json_str(r#"{"a":[1,2],"b":{}}"#).unwrap();
/// assert_eq!(
///     to_pretty_string(&value),
///     "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}"
/// );
/// ```
pub fn to_pretty_string(value: &Value) -> String {
    format!("{:#}", serde_json::Value::from(value))
}

/// Writes [`to_pretty_string`] output followed by a newline.
pub fn write_pretty(value: &Value, mut writer: impl Write) -> std::io::Result<()> {
    writeln!(writer, "{}", to_pretty_string(value))
}
