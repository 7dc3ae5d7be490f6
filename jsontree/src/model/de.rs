//! Conversions into [`Value`] from external data.
//!
//! This is the only place where foreign data enters the crate, and therefore
//! the only place that can report an unrecognized value kind.

use std::fmt;
use std::io::Read;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::EnumAccess;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde_json::error::Category;

use super::Map;
use super::Value;
use crate::error::ValueError;

const UNRECOGNIZED: &str = "unrecognized value kind";

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string, a sequence or a string-keyed map")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_char<E>(self, v: char) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_bytes<E: serde::de::Error>(self, _v: &[u8]) -> Result<Value, E> {
        Err(E::custom(format!("{UNRECOGNIZED}: bytes")))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, _data: A) -> Result<Value, A::Error> {
        Err(A::Error::custom(format!("{UNRECOGNIZED}: enum")))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Value::Mapping(map))
    }
}

impl Value {
    /// Parses a JSON document, keeping keys in document order.
    ///
    /// Nesting depth is unlimited; deep documents grow the stack on the heap
    /// instead of overflowing it.
    pub fn from_json_str(text: &str) -> Result<Self, ValueError> {
        parse(serde_json::Deserializer::from_str(text))
    }

    /// Parses a JSON document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ValueError> {
        parse(serde_json::Deserializer::from_reader(reader))
    }

    /// Converts any serializable Rust value, keeping field order.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, ValueError> {
        let json =
            serde_json::to_value(data).map_err(|e| ValueError::unrecognized(e.to_string()))?;
        Value::try_from(json)
    }
}

fn parse<'de, R: serde_json::de::Read<'de>>(
    mut deserializer: serde_json::Deserializer<R>,
) -> Result<Value, ValueError> {
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(classify)?;
    deserializer.end().map_err(classify)?;
    Ok(value)
}

/// Splits serde_json failures into contract violations and plain parse/IO
/// errors.
fn classify(err: serde_json::Error) -> ValueError {
    match err.classify() {
        Category::Io => return ValueError::Io(err.into()),
        Category::Data => {}
        Category::Syntax | Category::Eof => return ValueError::Parse(err),
    }
    let message = err.to_string();
    let location = format!(" at line {} column {}", err.line(), err.column());
    let message = message.strip_suffix(&location).unwrap_or(&message);
    match message.strip_prefix(UNRECOGNIZED) {
        Some(rest) => ValueError::unrecognized(rest.trim_start_matches(':').trim()),
        None => ValueError::Parse(err),
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(
                n.as_f64()
                    .ok_or_else(|| ValueError::unrecognized(format!("number {n}")))?,
            ),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Sequence(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            serde_json::Value::Object(object) => Value::Mapping(
                object
                    .into_iter()
                    .map(|(k, v)| Ok::<_, ValueError>((k, Value::try_from(v)?)))
                    .collect::<Result<Map, _>>()?,
            ),
        })
    }
}

/// Integral doubles up to this magnitude are written without a fraction.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => json_number(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// The JSON number for a double, or `None` when it has no JSON form
/// (NaN, infinities).
pub(crate) fn json_number(n: f64) -> Option<serde_json::Number> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
    }
}

#[cfg(test)]
mod tests {
    use serde::de::Error as _;

    use super::*;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(json_number(85.0).map(|n| n.to_string()), Some("85".into()));
        assert_eq!(json_number(-0.0).map(|n| n.to_string()), Some("0".into()));
        assert_eq!(json_number(2.4).map(|n| n.to_string()), Some("2.4".into()));
        assert_eq!(json_number(f64::NAN), None);
        assert_eq!(json_number(f64::INFINITY), None);
    }

    #[test]
    fn classify_reads_data_errors() {
        let err = serde_json::Error::custom(format!("{UNRECOGNIZED}: bytes"));
        match classify(err) {
            ValueError::UnrecognizedKind { kind } => assert_eq!(kind, "bytes"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn syntax_errors_are_parse_errors() {
        let err = serde_json::from_str::<Value>("[1,")
            .map_err(classify)
            .unwrap_err();
        assert!(matches!(err, ValueError::Parse(_)));

        let located = serde_json::Deserializer::from_str(r#""x" 1"#)
            .end()
            .map_err(classify)
            .unwrap_err();
        assert!(matches!(located, ValueError::Parse(_)));
    }

    #[test]
    fn unrecognized_kind_keeps_text_that_looks_like_a_location() {
        let err = serde_json::Error::custom(format!("{UNRECOGNIZED}: enum at line of sight"));
        match classify(err) {
            ValueError::UnrecognizedKind { kind } => assert_eq!(kind, "enum at line of sight"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
