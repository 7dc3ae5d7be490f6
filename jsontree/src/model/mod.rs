//! Document model: values, ordered maps and node paths.

mod de;
mod map;
mod path;
mod value;

pub use map::Map;
pub use path::{Path, Segment};
pub use value::Value;

pub(crate) use de::json_number;
