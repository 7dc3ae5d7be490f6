//! Frame drawing.
//!
//! Screen layout, top to bottom: tab bar with the copy button, a rule, the
//! body (tree rows or the analysis progress panel), and a one-line footer.

use std::time::Instant;

use jsontree::Value;
use jsontree::descriptor::{Accent, score_accent, status_descriptor, step_descriptor};
use jsontree::model::Segment;
use jsontree::progress::ProgressPhase;
use jsontree::render::{Row, SpanKind};
use jsontree::sample::workflow_steps;
use jsontree_term::text::{display_width, pad_to_width, truncate_to_width};
use jsontree_term::{Buffer, Cell, Rgb, TextStyle};

use crate::app::{App, Mode, Pane};
use crate::theme::Theme;

pub const COPY_BUTTON_WIDTH: u16 = 14;
const TAB_SEPARATOR: &str = "│";
const BODY_TOP: u16 = 2;

/// Screen regions for a terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn body_top(&self) -> u16 {
        BODY_TOP
    }

    /// Rows available to the body after header and footer.
    pub fn body_height(&self) -> usize {
        self.height.saturating_sub(BODY_TOP + 1) as usize
    }

    pub fn footer_y(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Body row offset for screen row `y`.
    pub fn body_row(&self, y: u16) -> Option<usize> {
        let offset = y.checked_sub(BODY_TOP)? as usize;
        (offset < self.body_height()).then_some(offset)
    }

    pub fn copy_button_x(&self) -> u16 {
        self.width.saturating_sub(COPY_BUTTON_WIDTH)
    }
}

/// Copy button text for the live acknowledgment state.
pub fn copy_label(feedback: Option<bool>) -> &'static str {
    match feedback {
        None => "Copy JSON",
        Some(true) => "Copied!",
        Some(false) => "Copy failed",
    }
}

/// Index of the tab drawn under column `x`.
pub fn tab_at<'a>(titles: impl Iterator<Item = &'a str>, x: u16) -> Option<usize> {
    let x = x as usize;
    let mut start = 0;
    for (index, title) in titles.enumerate() {
        let end = start + display_width(title) + 2;
        if (start..end).contains(&x) {
            return Some(index);
        }
        start = end + display_width(TAB_SEPARATOR);
    }
    None
}

fn brush(fg: Rgb, bg: Rgb) -> Cell {
    Cell::default().with_fg(fg).with_bg(bg)
}

pub fn draw(app: &App, buf: &mut Buffer, theme: &Theme, indent_width: usize, now: Instant) {
    let layout = Layout::new(buf.width(), buf.height());
    for y in 0..buf.height() {
        buf.fill(0, y, buf.width(), theme.background);
    }

    draw_header(app, buf, theme, layout, now);
    if app.showing_progress() {
        draw_progress(app, buf, theme, layout);
    } else {
        draw_tree(app.active_pane(), buf, theme, layout, indent_width);
    }
    draw_footer(app, buf, theme, layout);
}

fn draw_header(app: &App, buf: &mut Buffer, theme: &Theme, layout: Layout, now: Instant) {
    buf.fill(0, 0, layout.width, theme.surface);

    let tabs_end = layout.copy_button_x();
    let mut x = 0;
    for (index, pane) in app.panes().iter().enumerate() {
        if index > 0 {
            x = buf.put_str(x, 0, tabs_end, TAB_SEPARATOR, brush(theme.muted, theme.surface));
        }
        let label = format!(" {} ", pane.title());
        let cell = if index == app.active_index() {
            brush(theme.background, theme.primary).with_style(TextStyle::new().bold())
        } else {
            brush(theme.muted, theme.surface)
        };
        x = buf.put_str(x, 0, tabs_end, &label, cell);
    }

    let feedback = app.active_pane().session().copy_feedback(now);
    let color = match feedback {
        None => theme.primary,
        Some(true) => theme.accent(Accent::Green),
        Some(false) => theme.accent(Accent::Red),
    };
    let label = pad_to_width(&format!("[ {} ]", copy_label(feedback)), COPY_BUTTON_WIDTH as usize);
    buf.put_str(
        layout.copy_button_x(),
        0,
        layout.width,
        &label,
        brush(color, theme.surface).with_style(TextStyle::new().bold()),
    );

    let rule = "─".repeat(layout.width as usize);
    buf.put_str(0, 1, layout.width, &rule, brush(theme.muted, theme.background));
}

fn draw_tree(pane: &Pane, buf: &mut Buffer, theme: &Theme, layout: Layout, indent_width: usize) {
    let tree = pane.tree();
    let value = pane.session().value();

    for offset in 0..layout.body_height() {
        let index = pane.scroll() + offset;
        let Some(row) = tree.row(index) else { break };
        let y = layout.body_top() + offset as u16;

        let bg = if index == pane.cursor() {
            theme.selection
        } else {
            theme.background
        };
        buf.fill(0, y, layout.width, bg);

        let indent = (1 + row.depth * indent_width).min(u16::MAX as usize) as u16;
        let mut x = indent;
        let accent = semantic_accent(row, value);
        for span in &row.spans {
            let fg = match (span.kind, accent) {
                (SpanKind::Number | SpanKind::Text, Some(accent)) => theme.accent(accent),
                (kind, _) => theme.span(kind),
            };
            let style = match span.kind {
                SpanKind::Summary => TextStyle::new().italic(),
                SpanKind::Affordance => TextStyle::new().bold(),
                _ => TextStyle::new(),
            };
            x = buf.put_str(x, y, layout.width, &span.text, brush(fg, bg).with_style(style));
        }
    }
}

/// Report-aware coloring: scores by threshold, statuses by outcome.
fn semantic_accent(row: &Row, value: &Value) -> Option<Accent> {
    let Some(Segment::Key(key)) = row.path.segments().last() else {
        return None;
    };
    let node = value.get(&row.path)?;
    match key.as_str() {
        "score" | "overallScore" => node.as_f64().map(score_accent),
        "status" => node.as_str().map(|tag| status_descriptor(tag).accent),
        _ => None,
    }
}

fn draw_progress(app: &App, buf: &mut Buffer, theme: &Theme, layout: Layout) {
    let Some(ProgressPhase::Running { step: active }) = app.progress() else {
        return;
    };
    let url = match app.mode() {
        Mode::Demo { url } => url.as_str(),
        Mode::File => "",
    };

    let top = layout.body_top();
    let bottom = layout.footer_y();
    buf.put_str(
        1,
        top,
        layout.width,
        &format!("Analyzing {url}"),
        brush(theme.primary, theme.background).with_style(TextStyle::new().bold()),
    );

    let steps = workflow_steps();
    for (index, step) in steps.iter().enumerate() {
        let y = top + 2 + index as u16;
        if y >= bottom {
            break;
        }
        let descriptor = step_descriptor(step.kind);
        let (marker, marker_fg) = if index < active {
            ("✔", theme.accent(Accent::Green))
        } else if index == active {
            ("▸", theme.primary)
        } else {
            ("·", theme.muted)
        };
        let name_style = if index == active {
            TextStyle::new().bold()
        } else {
            TextStyle::new()
        };

        let mut x = buf.put_str(2, y, layout.width, marker, brush(marker_fg, theme.background));
        x = buf.put_str(
            x + 1,
            y,
            layout.width,
            descriptor.glyph,
            brush(theme.accent(descriptor.accent), theme.background),
        );
        let label = pad_to_width(&format!(" {:<8}", descriptor.label), 10);
        x = buf.put_str(x, y, layout.width, &label, brush(theme.muted, theme.background));
        x = buf.put_str(
            x,
            y,
            layout.width,
            &pad_to_width(step.name, 24),
            brush(theme.foreground, theme.background).with_style(name_style),
        );
        buf.put_str(x, y, layout.width, step.description, brush(theme.muted, theme.background));
    }

    let y = top + 3 + steps.len() as u16;
    if y < bottom {
        let done = (active + 1).min(steps.len());
        buf.put_str(
            2,
            y,
            layout.width,
            &format!("step {done} of {}", steps.len()),
            brush(theme.muted, theme.background),
        );
    }
}

fn draw_footer(app: &App, buf: &mut Buffer, theme: &Theme, layout: Layout) {
    let y = layout.footer_y();
    if y < BODY_TOP {
        return;
    }
    buf.fill(0, y, layout.width, theme.surface);

    if let Some(notice) = app.notice() {
        buf.put_str(1, y, layout.width, notice, brush(theme.accent(Accent::Yellow), theme.surface));
        return;
    }

    let hints = match app.mode() {
        Mode::File => "↑↓ move  ⏎ toggle  ←→ fold  E/C all  c copy  q quit",
        Mode::Demo { .. } => {
            "↑↓ move  ⏎ toggle  ←→ fold  E/C all  c copy  Tab pane  r analyze  q quit"
        }
    };
    let x = buf.put_str(1, y, layout.width, hints, brush(theme.muted, theme.surface));

    let pane = app.active_pane();
    if let Some(row) = pane.tree().row(pane.cursor()) {
        let path = row.path.to_string();
        let room = (layout.width as usize).saturating_sub(x as usize + 3);
        let path = truncate_to_width(&path, room);
        let start = layout.width.saturating_sub(display_width(&path) as u16 + 1);
        if start > x {
            buf.put_str(start, y, layout.width, &path, brush(theme.foreground, theme.surface));
        }
    }
}

#[cfg(test)]
mod tests {
    use jsontree::clipboard::MemoryClipboard;
    use jsontree_term::Event;

    use super::*;
    use crate::config::ViewerConfig;

    fn frame(app: &App, width: u16, height: u16, now: Instant) -> Buffer {
        let mut buf = Buffer::new(width, height);
        draw(app, &mut buf, &Theme::default(), 2, now);
        buf
    }

    fn file_app() -> App {
        let value = Value::from_json_str(r#"{"overallScore": 78, "scores": [85, 72]}"#).unwrap();
        let mut app = App::for_file("doc.json", value, &ViewerConfig::default());
        app.resize(60, 12);
        app
    }

    #[test]
    fn layout_regions() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout.body_height(), 21);
        assert_eq!(layout.body_row(1), None);
        assert_eq!(layout.body_row(2), Some(0));
        assert_eq!(layout.body_row(22), Some(20));
        assert_eq!(layout.body_row(23), None);
        assert_eq!(Layout::new(10, 2).body_height(), 0);
    }

    #[test]
    fn tabs_hit_test() {
        let titles = ["ab", "cd"];
        assert_eq!(tab_at(titles.into_iter(), 0), Some(0));
        assert_eq!(tab_at(titles.into_iter(), 3), Some(0));
        assert_eq!(tab_at(titles.into_iter(), 4), None);
        assert_eq!(tab_at(titles.into_iter(), 5), Some(1));
        assert_eq!(tab_at(titles.into_iter(), 9), None);
    }

    #[test]
    fn draws_rows_with_indentation() {
        let app = file_app();
        let buf = frame(&app, 60, 12, Instant::now());

        assert!(buf.row_text(0).starts_with(" doc.json "));
        assert!(buf.row_text(0).contains("[ Copy JSON ]"));
        assert!(buf.row_text(2).starts_with(" ▼ {"));
        assert!(buf.row_text(3).starts_with("   \"overallScore\": 78,"));
        assert!(buf.row_text(5).starts_with("     85,"));
        assert!(buf.row_text(11).contains("root"));
    }

    #[test]
    fn score_is_colored_by_threshold() {
        let app = file_app();
        let theme = Theme::default();
        let buf = frame(&app, 60, 12, Instant::now());

        let x = buf.row_text(3).find("78").unwrap() as u16;
        assert_eq!(buf.get(x, 3).unwrap().fg, theme.accent(Accent::Yellow));
    }

    #[test]
    fn copy_label_follows_feedback() {
        let mut app = file_app();
        let now = Instant::now();
        app.handle_event(Event::char('c'), now, &mut MemoryClipboard::new());

        let buf = frame(&app, 60, 12, now);
        assert!(buf.row_text(0).contains("[ Copied! ]"));

        let later = now + std::time::Duration::from_secs(3);
        let buf = frame(&app, 60, 12, later);
        assert!(buf.row_text(0).contains("[ Copy JSON ]"));
    }

    #[test]
    fn progress_panel_replaces_report() {
        let mut app = App::demo("https://stripe.com", &ViewerConfig::default()).unwrap();
        app.resize(100, 20);
        let now = Instant::now();
        app.handle_event(Event::char('r'), now, &mut MemoryClipboard::new());
        app.tick(now);

        let buf = frame(&app, 100, 20, now);
        assert!(buf.row_text(2).contains("Analyzing https://stripe.com"));
        assert!(buf.row_text(4).contains("▸"));
        assert!(buf.row_text(4).contains("URL Input"));
        assert!(buf.row_text(5).contains("Validate URL"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = file_app();
        frame(&app, 3, 1, Instant::now());
        frame(&app, 0, 0, Instant::now());
    }
}
