//! Collapsible JSON tree rendering
//!
//! Renders JSON-like documents as indented, syntax-tagged rows where every
//! non-empty container can be collapsed to a one-line summary, and copies the
//! whole document as pretty-printed JSON regardless of what is collapsed.

pub mod clipboard;
pub mod collapse;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod progress;
pub mod render;
pub mod sample;
pub mod serialize;

mod session;

pub use error::Error;
pub use model::{Map, Path, Segment, Value};
pub use session::*;
