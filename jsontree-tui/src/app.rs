//! Viewer state and input handling.
//!
//! Everything here is driven by explicit events and timestamps so it can be
//! exercised without a terminal; `main` only feeds it.

use std::time::{Duration, Instant};

use jsontree::clipboard::{Clipboard, CopyIndicator};
use jsontree::error::ValueError;
use jsontree::progress::{ProgressEvent, ProgressPhase, ProgressRun, Schedule};
use jsontree::render::RenderedTree;
use jsontree::sample::{output_schema, sample_report};
use jsontree::{Path, ToggleOutcome, TreeSession, Value};
use jsontree_term::{Event, Key, MouseButton};

use crate::config::ViewerConfig;
use crate::view::{self, Layout};

/// Rows moved per mouse wheel notch.
const SCROLL_STEP: isize = 3;
/// Longest the event loop sleeps when nothing is scheduled.
const IDLE_WAKEUP: Duration = Duration::from_millis(250);

pub const REPORT_TITLE: &str = "Example Report";
pub const SCHEMA_TITLE: &str = "JSON Schema Definition";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Viewing a single document loaded from a file or stdin.
    File,
    /// Sample report plus its schema; `r` replays the simulated analysis.
    Demo { url: String },
}

/// One tree view: a session plus its cursor and scroll offset.
pub struct Pane {
    title: String,
    session: TreeSession,
    tree: RenderedTree,
    cursor: usize,
    scroll: usize,
}

impl Pane {
    pub fn new(title: impl Into<String>, value: Value, indicator: CopyIndicator) -> Self {
        let session = TreeSession::new(value).with_indicator(indicator);
        let tree = session.render();
        Self {
            title: title.into(),
            session,
            tree,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn session(&self) -> &TreeSession {
        &self.session
    }

    pub fn tree(&self) -> &RenderedTree {
        &self.tree
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn selected_path(&self) -> Option<Path> {
        self.tree.row(self.cursor).map(|row| row.path.clone())
    }

    fn last_row(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    fn refresh(&mut self) {
        self.tree = self.session.render();
        self.cursor = self.cursor.min(self.last_row());
    }

    fn move_cursor(&mut self, delta: isize) {
        self.cursor = self.cursor.saturating_add_signed(delta).min(self.last_row());
    }

    fn toggle(&mut self, path: &Path) -> ToggleOutcome {
        let outcome = self.session.toggle(path);
        if outcome != ToggleOutcome::Ignored {
            self.refresh();
            if let Some(row) = self.tree.row_for_path(path) {
                self.cursor = row;
            }
        }
        outcome
    }

    fn toggle_selected(&mut self) {
        if let Some(path) = self.selected_path() {
            self.toggle(&path);
        }
    }

    /// Collapses the selected container, or moves to its parent when it is
    /// already collapsed or not a container.
    fn collapse_selected(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        let expanded = self.session.value().get(&path).is_some_and(Value::is_container)
            && !self.session.collapsed().contains(&path);
        if expanded {
            self.toggle(&path);
        } else if let Some(row) = path.parent().and_then(|parent| self.tree.row_for_path(&parent)) {
            self.cursor = row;
        }
    }

    fn expand_selected(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        if self.session.collapsed().contains(&path) {
            self.toggle(&path);
        }
    }

    fn collapse_all(&mut self) {
        self.session.collapse_all();
        self.refresh();
    }

    fn expand_all(&mut self) {
        self.session.expand_all();
        self.refresh();
    }

    fn replace_value(&mut self, value: Value) {
        self.session.replace_value(value);
        self.refresh();
    }

    /// Scrolls so the cursor is inside a window of `height` rows.
    fn follow_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
        self.scroll = self.scroll.min(self.tree.len().saturating_sub(height));
    }

    /// Scrolls the window, dragging the cursor along when it falls outside.
    fn scroll_by(&mut self, delta: isize, height: usize) {
        if height == 0 {
            return;
        }
        let max_scroll = self.tree.len().saturating_sub(height);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max_scroll);
        if self.cursor < self.scroll {
            self.cursor = self.scroll;
        } else if self.cursor >= self.scroll + height {
            self.cursor = self.scroll + height - 1;
        }
        self.cursor = self.cursor.min(self.last_row());
    }
}

pub struct App {
    mode: Mode,
    panes: Vec<Pane>,
    active: usize,
    schedule: Schedule,
    run: Option<ProgressRun>,
    layout: Layout,
    notice: Option<String>,
    quit: bool,
}

impl App {
    pub fn for_file(title: impl Into<String>, value: Value, config: &ViewerConfig) -> Self {
        let indicator = CopyIndicator::new(config.copy_feedback());
        Self::new(Mode::File, vec![Pane::new(title, value, indicator)])
    }

    pub fn demo(url: &str, config: &ViewerConfig) -> Result<Self, ValueError> {
        let indicator = CopyIndicator::new(config.copy_feedback());
        let report = sample_report(url, chrono::Utc::now()).to_value()?;
        Ok(Self::new(
            Mode::Demo {
                url: url.to_string(),
            },
            vec![
                Pane::new(REPORT_TITLE, report, indicator),
                Pane::new(SCHEMA_TITLE, output_schema(), indicator),
            ],
        ))
    }

    fn new(mode: Mode, panes: Vec<Pane>) -> Self {
        Self {
            mode,
            panes,
            active: 0,
            schedule: Schedule::default(),
            run: None,
            layout: Layout::default(),
            notice: None,
            quit: false,
        }
    }

    #[cfg(test)]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_pane(&self) -> &Pane {
        &self.panes[self.active]
    }

    /// Phase of the simulated analysis while one is running.
    pub fn progress(&self) -> Option<ProgressPhase> {
        self.run.as_ref().map(ProgressRun::phase)
    }

    /// Whether the active pane is covered by the progress panel.
    pub fn showing_progress(&self) -> bool {
        self.run.is_some() && self.active == 0
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = Layout::new(width, height);
        let body = self.layout.body_height();
        for pane in &mut self.panes {
            pane.follow_cursor(body);
        }
    }

    /// How long the event loop may sleep before the next scheduled change.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        self.run
            .as_ref()
            .and_then(|run| run.until_next(now))
            .map_or(IDLE_WAKEUP, |due| due.min(IDLE_WAKEUP))
    }

    /// Advances the simulated analysis.
    pub fn tick(&mut self, now: Instant) {
        let events = match self.run.as_mut() {
            Some(run) => run.poll(now),
            None => return,
        };
        for event in events {
            match event {
                ProgressEvent::Step(step) => log::debug!("analysis step {} active", step),
                ProgressEvent::Complete => self.finish_run(),
            }
        }
    }

    pub fn handle_event(&mut self, event: Event, now: Instant, clipboard: &mut dyn Clipboard) {
        match event {
            Event::Key { key, modifiers } => {
                self.notice = None;
                self.handle_key(key, modifiers.ctrl, now, clipboard);
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y, now, clipboard),
            Event::Click { .. } => {}
            Event::Scroll { delta, .. } => {
                let height = self.layout.body_height();
                self.panes[self.active].scroll_by(isize::from(delta) * SCROLL_STEP, height);
            }
            Event::Resize { width, height } => self.resize(width, height),
        }
    }

    fn handle_key(&mut self, key: Key, ctrl: bool, now: Instant, clipboard: &mut dyn Clipboard) {
        match key {
            Key::Char('c') if ctrl => self.quit = true,
            Key::Char('q') | Key::Escape => self.quit = true,
            Key::Char('c') => self.copy(now, clipboard),
            Key::Tab => self.active = (self.active + 1) % self.panes.len(),
            Key::BackTab => self.active = (self.active + self.panes.len() - 1) % self.panes.len(),
            Key::Char('r') => self.start_run(now),
            _ if self.showing_progress() => {}
            _ => self.handle_tree_key(key),
        }
    }

    fn handle_tree_key(&mut self, key: Key) {
        let height = self.layout.body_height();
        let page = height.max(1) as isize;
        let pane = &mut self.panes[self.active];
        match key {
            Key::Up | Key::Char('k') => pane.move_cursor(-1),
            Key::Down | Key::Char('j') => pane.move_cursor(1),
            Key::PageUp => pane.move_cursor(-page),
            Key::PageDown => pane.move_cursor(page),
            Key::Home => pane.cursor = 0,
            Key::End => pane.cursor = pane.last_row(),
            Key::Enter | Key::Char(' ') => pane.toggle_selected(),
            Key::Left => pane.collapse_selected(),
            Key::Right => pane.expand_selected(),
            Key::Char('E') => pane.expand_all(),
            Key::Char('C') => pane.collapse_all(),
            _ => return,
        }
        pane.follow_cursor(height);
    }

    fn handle_click(&mut self, x: u16, y: u16, now: Instant, clipboard: &mut dyn Clipboard) {
        if y == 0 {
            if x >= self.layout.copy_button_x() {
                self.copy(now, clipboard);
            } else if let Some(index) = view::tab_at(self.panes.iter().map(Pane::title), x) {
                self.active = index;
            }
            return;
        }

        if self.showing_progress() {
            return;
        }
        let Some(offset) = self.layout.body_row(y) else {
            return;
        };
        let height = self.layout.body_height();
        let pane = &mut self.panes[self.active];
        let index = pane.scroll + offset;
        let Some(row) = pane.tree.row(index) else {
            return;
        };
        let toggle = row.toggle.as_ref().map(|affordance| affordance.path.clone());
        pane.cursor = index;
        if let Some(path) = toggle {
            pane.toggle(&path);
        }
        pane.follow_cursor(height);
    }

    fn copy(&mut self, now: Instant, clipboard: &mut dyn Clipboard) {
        let outcome = self.panes[self.active].session.copy(clipboard, now);
        if let Err(e) = &outcome.delivery {
            self.notice = Some(format!("{e}; print the document with --json instead"));
        }
    }

    fn start_run(&mut self, now: Instant) {
        let Mode::Demo { url } = &self.mode else {
            log::debug!("no analysis to run in file mode");
            return;
        };
        if self.run.is_some() {
            return;
        }
        log::info!("starting simulated analysis of {}", url);
        self.run = Some(ProgressRun::start(&self.schedule, now));
        self.active = 0;
    }

    fn finish_run(&mut self) {
        self.run = None;
        let Mode::Demo { url } = &self.mode else {
            return;
        };
        match sample_report(url, chrono::Utc::now()).to_value() {
            Ok(report) => {
                log::info!("analysis of {} complete", url);
                self.panes[0].replace_value(report);
            }
            Err(e) => {
                log::error!("failed to build report for {}: {}", url, e);
                self.notice = Some(format!("report unavailable: {e}"));
            }
        }
    }
}
