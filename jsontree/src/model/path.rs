//! Node addresses inside a [`Value`](super::Value) tree.

use std::fmt;

/// One step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Position inside a sequence.
    Index(usize),
    /// Key inside a mapping.
    Key(String),
}

/// Address of a node, as the list of segments walked from the root.
///
/// Paths compare and hash by their segments, never by a concatenated string,
/// so a key such as `"a.b"` or `"x[0]"` cannot collide with a nested path.
/// The [`Display`](fmt::Display) form (`root.scores[0]`) exists for logs and
/// status lines only.
///
/// # Example
///
/// ```
/// use jsontree::model::Path;
///
/// let path = Path::root().key("scores").index(2);
/// assert_eq!(path.to_string(), "root.scores[2]");
/// assert_ne!(Path::root().key("a.b"), Path::root().key("a").key("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns this path extended with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    /// Returns this path extended with a mapping key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `self` is `other` or one of its descendants.
    pub fn starts_with(&self, other: &Path) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{i}]")?,
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{k}")?,
                Segment::Key(k) => write!(f, "[{}]", serde_json::Value::from(k.as_str()))?,
            }
        }
        Ok(())
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_ambiguous_keys() {
        let path = Path::root().key("items").index(2).key("a.b");
        assert_eq!(path.to_string(), r#"root.items[2]["a.b"]"#);
    }

    #[test]
    fn display_root() {
        assert_eq!(Path::root().to_string(), "root");
    }

    #[test]
    fn parent_walks_up() {
        let path = Path::root().key("a").index(0);
        assert_eq!(path.parent(), Some(Path::root().key("a")));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn starts_with_is_prefix() {
        let a = Path::root().key("a");
        let ab = a.key("b");
        assert!(ab.starts_with(&a));
        assert!(a.starts_with(&a));
        assert!(!a.starts_with(&ab));
    }
}
