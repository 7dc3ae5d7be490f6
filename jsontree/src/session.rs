//! Per-instance renderer state.

use std::time::Instant;

use crate::clipboard::{self, Clipboard, CopyIndicator, CopyOutcome};
use crate::collapse::CollapseState;
use crate::model::{Path, Value};
use crate::render::{RenderedTree, render};

/// What a [`TreeSession::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Collapsed,
    Expanded,
    /// The path does not address a non-empty container; nothing changed.
    Ignored,
}

/// One tree renderer instance: the value it shows and the collapse state the
/// user built up for it.
///
/// Each session owns its state exclusively. Collapse state starts empty and
/// is dropped with the session.
#[derive(Debug, Clone)]
pub struct TreeSession {
    value: Value,
    collapsed: CollapseState,
    indicator: CopyIndicator,
}

impl TreeSession {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            collapsed: CollapseState::new(),
            indicator: CopyIndicator::default(),
        }
    }

    pub fn with_indicator(mut self, indicator: CopyIndicator) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn collapsed(&self) -> &CollapseState {
        &self.collapsed
    }

    /// Swaps in new data. Collapse state is kept; entries that no longer
    /// resolve are inert.
    pub fn replace_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn render(&self) -> RenderedTree {
        render(&self.value, &self.collapsed)
    }

    /// Flips the collapse state of the container at `path`.
    pub fn toggle(&mut self, path: &Path) -> ToggleOutcome {
        let toggleable = self.value.get(path).is_some_and(Value::is_container);
        if !toggleable {
            log::debug!("ignoring toggle of {}", path);
            return ToggleOutcome::Ignored;
        }

        if self.collapsed.toggle(path) {
            log::debug!("collapsed {}", path);
            ToggleOutcome::Collapsed
        } else {
            log::debug!("expanded {}", path);
            ToggleOutcome::Expanded
        }
    }

    pub fn collapse_all(&mut self) {
        self.collapsed.collapse_all(&self.value);
    }

    pub fn expand_all(&mut self) {
        self.collapsed.expand_all();
    }

    /// Copies the whole document and arms the acknowledgment.
    pub fn copy(&mut self, sink: &mut dyn Clipboard, now: Instant) -> CopyOutcome {
        let outcome = clipboard::copy(&self.value, sink);
        self.indicator.show(now, outcome.delivered());
        outcome
    }

    /// Live copy acknowledgment, see [`CopyIndicator::state`].
    pub fn copy_feedback(&self, now: Instant) -> Option<bool> {
        self.indicator.state(now)
    }
}
