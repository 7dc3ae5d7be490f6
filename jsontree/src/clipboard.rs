//! Whole-document copy and clipboard sinks.

use std::io::Write;
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ClipboardError;
use crate::model::Value;
use crate::serialize::to_pretty_string;

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Result of a copy: the serialized document, plus whether the sink took it.
///
/// The text is returned either way so the caller can offer a fallback.
#[derive(Debug)]
pub struct CopyOutcome {
    pub text: String,
    pub delivery: Result<(), ClipboardError>,
}

impl CopyOutcome {
    pub fn delivered(&self) -> bool {
        self.delivery.is_ok()
    }
}

/// Serializes `value` and hands it to `sink`.
///
/// Idempotent for unchanged data; the sink write is the only side effect.
pub fn copy(value: &Value, sink: &mut dyn Clipboard) -> CopyOutcome {
    let text = to_pretty_string(value);
    let delivery = sink.set_text(&text);
    match &delivery {
        Ok(()) => log::debug!("copied {} bytes to clipboard", text.len()),
        Err(e) => log::warn!("copy not delivered: {}", e),
    }
    CopyOutcome { text, delivery }
}

// =============================================================================
// Sinks
// =============================================================================

/// Terminal clipboard via the OSC 52 escape sequence.
///
/// Most modern terminals (and tmux with `set-clipboard on`) forward this to
/// the system clipboard, including over SSH.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    max_bytes: usize,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Default payload ceiling; several terminals drop larger sequences.
    pub const DEFAULT_MAX_BYTES: usize = 100_000;

    pub fn new(out: W) -> Self {
        Self {
            out,
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let encoded = STANDARD.encode(text);
        if encoded.len() > self.max_bytes {
            return Err(ClipboardError::TooLarge {
                len: encoded.len(),
                max: self.max_bytes,
            });
        }
        write!(self.out, "\x1b]52;c;{encoded}\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-memory sink that keeps the last copied text.
///
/// Used where no system clipboard exists and the caller routes the text
/// itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Sink for environments without any clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

// =============================================================================
// Acknowledgment
// =============================================================================

/// Transient "copied" acknowledgment with a fixed lifetime.
#[derive(Debug, Clone, Copy)]
pub struct CopyIndicator {
    shown_at: Option<Instant>,
    succeeded: bool,
    ttl: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl CopyIndicator {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(2000);

    pub fn new(ttl: Duration) -> Self {
        Self {
            shown_at: None,
            succeeded: false,
            ttl,
        }
    }

    pub fn show(&mut self, now: Instant, succeeded: bool) {
        self.shown_at = Some(now);
        self.succeeded = succeeded;
    }

    /// The live acknowledgment at `now`: `Some(true)` after a delivered copy,
    /// `Some(false)` after a failed one, `None` once expired.
    pub fn state(&self, now: Instant) -> Option<bool> {
        let shown_at = self.shown_at?;
        (now.saturating_duration_since(shown_at) < self.ttl).then_some(self.succeeded)
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.state(now).is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_expires() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::new(Duration::from_millis(100));
        assert!(!indicator.is_visible(start));

        indicator.show(start, true);
        assert_eq!(indicator.state(start + Duration::from_millis(99)), Some(true));
        assert_eq!(indicator.state(start + Duration::from_millis(100)), None);
    }

    #[test]
    fn indicator_reports_failure() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::default();
        indicator.show(start, false);
        assert_eq!(indicator.state(start), Some(false));
    }
}
