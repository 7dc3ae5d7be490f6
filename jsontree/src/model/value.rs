//! Value enum for JSON-like documents

use super::Map;
use super::Path;
use super::Segment;

/// A node of a JSON-like document.
///
/// The set of kinds is closed: every consumer in this crate matches on it
/// exhaustively, so a new kind cannot be silently mishandled.
///
/// # Kind Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true / false | `Bool` |
/// | number | `Number` |
/// | string | `Text` |
/// | array | `Sequence` |
/// | object | `Mapping` |
///
/// # Example
///
/// ```
/// use jsontree::model::Value;
///
/// let url = Value::from("https://x.com");
/// let score = Value::from(85);
/// let scores = Value::from(vec![Value::from(85), Value::from(72)]);
/// assert!(scores.is_container());
/// assert!(!url.is_container());
/// assert_eq!(score.kind_name(), "number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// String value.
    Text(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Ordered key/value mapping with unique keys.
    Mapping(Map),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the kind name of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Number of direct children (0 for scalars).
    pub fn child_count(&self) -> usize {
        match self {
            Value::Sequence(items) => items.len(),
            Value::Mapping(map) => map.len(),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => 0,
        }
    }

    /// A sequence or mapping with at least one child. Only containers are
    /// collapsible.
    pub fn is_container(&self) -> bool {
        self.child_count() > 0
    }

    /// Total number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Value::Sequence(items) => 1 + items.iter().map(Value::node_count).sum::<usize>(),
            Value::Mapping(map) => 1 + map.values().map(Value::node_count).sum::<usize>(),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => 1,
        }
    }

    /// Resolves a path against this value.
    pub fn get(&self, path: &Path) -> Option<&Value> {
        let mut current = self;
        for segment in path.segments() {
            current = match (current, segment) {
                (Value::Sequence(items), Segment::Index(i)) => items.get(*i)?,
                (Value::Mapping(map), Segment::Key(k)) => map.get(k)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Paths of every container in the tree, in depth-first order.
    pub fn container_paths(&self) -> Vec<Path> {
        let mut out = Vec::new();
        collect_containers(self, Path::root(), &mut out);
        out
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

fn collect_containers(value: &Value, path: Path, out: &mut Vec<Path>) {
    if !value.is_container() {
        return;
    }
    out.push(path.clone());
    match value {
        Value::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_containers(item, path.index(i), out);
            }
        }
        Value::Mapping(map) => {
            for (key, child) in map.iter() {
                collect_containers(child, path.key(key), out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {}
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Mapping(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        let inner: Map = [("b".to_string(), Value::Sequence(vec![Value::from(1), Value::from(2)]))]
            .into_iter()
            .collect();
        let root: Map = [
            ("a".to_string(), Value::Mapping(inner)),
            ("e".to_string(), Value::Sequence(vec![])),
        ]
        .into_iter()
        .collect();
        Value::Mapping(root)
    }

    #[test]
    fn container_paths_are_preorder() {
        let paths = sample().container_paths();
        assert_eq!(
            paths,
            vec![
                Path::root(),
                Path::root().key("a"),
                Path::root().key("a").key("b"),
            ]
        );
    }

    #[test]
    fn get_follows_segments() {
        let value = sample();
        let leaf = Path::root().key("a").key("b").index(1);
        assert_eq!(value.get(&leaf), Some(&Value::from(2)));
        assert_eq!(value.get(&Path::root().index(0)), None);
        assert_eq!(value.get(&Path::root().key("a").key("missing")), None);
    }

    #[test]
    fn node_count_includes_root() {
        // root, a, b, 1, 2, e
        assert_eq!(sample().node_count(), 6);
        assert_eq!(Value::Null.node_count(), 1);
    }

    #[test]
    fn empty_containers_are_not_containers() {
        assert!(!Value::Sequence(vec![]).is_container());
        assert!(!Value::Mapping(Map::new()).is_container());
    }
}
