//! Tree renderer.
//!
//! Turns a [`Value`] plus a [`CollapseState`] into a flat list of indented
//! [`Row`]s. Containers get an [`Affordance`] on their opening row; collapsed
//! containers are summarized on a single row (`[ 3 items ]`,
//! `{ 2 properties }`). Rendering is deterministic, depth-first, and never
//! fails for any value.
//!
//! # Example
//!
//! ```
//! use jsontree::collapse::CollapseState;
//! use jsontree::model::{Path, Value};
//! use jsontree::render::render;
//!
//! let value = Value::from_json_str(r#"{"scores": [85, 72]}"#).unwrap();
//! let mut collapsed = CollapseState::new();
//!
//! let tree = render(&value, &collapsed);
//! assert_eq!(tree.to_text(2), "▼ {\n  \"scores\": ▼ [\n    85,\n    72\n  ]\n}");
//!
//! collapsed.toggle(&Path::root().key("scores"));
//! let tree = render(&value, &collapsed);
//! assert_eq!(tree.to_text(2), "▼ {\n  \"scores\": ▶ [ 2 items ]\n}");
//! ```

mod format;

pub use format::{format_number, quote};

use crate::collapse::CollapseState;
use crate::model::{Path, Value};

/// Glyph shown on an expanded container's opening row.
pub const EXPANDED_GLYPH: &str = "▼";
/// Glyph shown on a collapsed container's row.
pub const COLLAPSED_GLYPH: &str = "▶";

/// Visual role of a span, used by front-ends to pick colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Quoted mapping key.
    Key,
    /// Brackets, braces, `: ` and `,`.
    Punctuation,
    Null,
    Bool,
    Number,
    Text,
    /// `<n> items` / `<n> properties` on a collapsed container.
    Summary,
    /// Expand/collapse glyph.
    Affordance,
}

/// A run of text with a single visual role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Expand/collapse control attached to a container's opening row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    /// Path to toggle when the control is activated.
    pub path: Path,
    /// Whether the container is currently collapsed.
    pub collapsed: bool,
}

/// One visual line of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Nesting level. Indentation is derived from this at display time.
    pub depth: usize,
    /// The node this row belongs to. A container's closing row carries the
    /// container's path.
    pub path: Path,
    pub spans: Vec<Span>,
    pub toggle: Option<Affordance>,
}

impl Row {
    /// Row text without indentation.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Row text indented by `depth * indent_width` spaces.
    pub fn indented_text(&self, indent_width: usize) -> String {
        format!("{}{}", " ".repeat(self.depth * indent_width), self.text())
    }
}

/// Output of [`render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedTree {
    rows: Vec<Row>,
    nodes_visited: usize,
}

impl RenderedTree {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of value nodes emitted. Equals
    /// [`Value::node_count`] when nothing is collapsed.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Index of the first row belonging to `path` (its opening row for
    /// containers).
    pub fn row_for_path(&self, path: &Path) -> Option<usize> {
        self.rows.iter().position(|row| &row.path == path)
    }

    /// Rows that carry an expand/collapse control.
    pub fn affordances(&self) -> impl Iterator<Item = &Affordance> {
        self.rows.iter().filter_map(|row| row.toggle.as_ref())
    }

    /// Plain-text rendering, one line per row.
    pub fn to_text(&self, indent_width: usize) -> String {
        self.rows
            .iter()
            .map(|row| row.indented_text(indent_width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders `value` honoring the collapsed paths in `collapsed`.
pub fn render(value: &Value, collapsed: &CollapseState) -> RenderedTree {
    let mut renderer = Renderer {
        collapsed,
        out: RenderedTree::default(),
    };
    renderer.node(value, Path::root(), 0, Vec::new(), false);
    renderer.out
}

struct Renderer<'a> {
    collapsed: &'a CollapseState,
    out: RenderedTree,
}

impl Renderer<'_> {
    /// Emits the rows for one node. `spans` holds anything that precedes the
    /// value on its first row (a mapping key); `comma` appends a separator to
    /// the node's last row.
    fn node(&mut self, value: &Value, path: Path, depth: usize, mut spans: Vec<Span>, comma: bool) {
        self.out.nodes_visited += 1;

        let scalar = match value {
            Value::Null => Span::new(SpanKind::Null, "null"),
            Value::Bool(b) => Span::new(SpanKind::Bool, b.to_string()),
            Value::Number(n) => Span::new(SpanKind::Number, format_number(*n)),
            Value::Text(s) => Span::new(SpanKind::Text, quote(s)),
            Value::Sequence(items) if items.is_empty() => punct("[]"),
            Value::Mapping(map) if map.is_empty() => punct("{}"),
            Value::Sequence(items) => {
                let summary = format!("{} items", items.len());
                if self.open(&path, depth, spans, ("[", "]"), summary, comma) {
                    let last = items.len() - 1;
                    for (i, item) in items.iter().enumerate() {
                        self.node(item, path.index(i), depth + 1, Vec::new(), i < last);
                    }
                    self.close(path, depth, "]", comma);
                }
                return;
            }
            Value::Mapping(map) => {
                let summary = format!("{} properties", map.len());
                if self.open(&path, depth, spans, ("{", "}"), summary, comma) {
                    let last = map.len() - 1;
                    for (i, (key, child)) in map.iter().enumerate() {
                        let prefix = vec![Span::new(SpanKind::Key, quote(key)), punct(": ")];
                        self.node(child, path.key(key), depth + 1, prefix, i < last);
                    }
                    self.close(path, depth, "}", comma);
                }
                return;
            }
        };

        spans.push(scalar);
        if comma {
            spans.push(punct(","));
        }
        self.out.rows.push(Row {
            depth,
            path,
            spans,
            toggle: None,
        });
    }

    /// Emits a container's opening row. Returns `true` when the children
    /// should follow (expanded), `false` when the single summary row was
    /// emitted instead.
    fn open(
        &mut self,
        path: &Path,
        depth: usize,
        mut spans: Vec<Span>,
        (open, close): (&str, &str),
        summary: String,
        comma: bool,
    ) -> bool {
        let collapsed = self.collapsed.contains(path);
        let glyph = if collapsed {
            COLLAPSED_GLYPH
        } else {
            EXPANDED_GLYPH
        };
        spans.push(Span::new(SpanKind::Affordance, format!("{glyph} ")));
        spans.push(punct(open));

        if collapsed {
            spans.push(Span::new(SpanKind::Summary, format!(" {summary} ")));
            spans.push(punct(close));
            if comma {
                spans.push(punct(","));
            }
        }

        self.out.rows.push(Row {
            depth,
            path: path.clone(),
            spans,
            toggle: Some(Affordance {
                path: path.clone(),
                collapsed,
            }),
        });
        !collapsed
    }

    fn close(&mut self, path: Path, depth: usize, close: &str, comma: bool) {
        let mut spans = vec![punct(close)];
        if comma {
            spans.push(punct(","));
        }
        self.out.rows.push(Row {
            depth,
            path,
            spans,
            toggle: None,
        });
    }
}

fn punct(text: &str) -> Span {
    Span::new(SpanKind::Punctuation, text)
}
