//! Error types

mod clipboard;
mod value;

pub use clipboard::*;
pub use value::*;

/// Any failure surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
