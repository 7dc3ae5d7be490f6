//! Input boundary errors

/// Failure to turn embedder-supplied data into a [`Value`](crate::model::Value).
///
/// Rendering itself never fails; every error here is raised while data
/// crosses into the crate.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// The input holds something outside the six supported kinds
    /// (bytes, enum payloads, non-string map keys, unrepresentable numbers).
    #[error("unrecognized value kind: {kind}")]
    UnrecognizedKind { kind: String },

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ValueError {
    pub fn unrecognized(kind: impl Into<String>) -> Self {
        Self::UnrecognizedKind { kind: kind.into() }
    }

    /// Returns `true` for contract violations, as opposed to I/O or syntax
    /// problems.
    pub fn is_unrecognized_kind(&self) -> bool {
        matches!(self, Self::UnrecognizedKind { .. })
    }
}
