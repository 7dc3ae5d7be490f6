//! Clipboard sink errors

/// Why a clipboard write did not happen.
///
/// These are never fatal: the serialized text is still handed back to the
/// caller alongside the error.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard sink exists in this environment.
    #[error("clipboard unavailable")]
    Unavailable,

    /// The payload exceeds what the sink accepts.
    #[error("payload of {len} bytes exceeds clipboard limit of {max} bytes")]
    TooLarge { len: usize, max: usize },

    /// Writing to the sink failed.
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}
