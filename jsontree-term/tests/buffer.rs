use jsontree_term::{Buffer, Cell, Color, Rgb, TextStyle};

fn brush() -> Cell {
    Cell::default().with_fg(Rgb::new(10, 20, 30)).with_style(TextStyle::new().bold())
}

// ============================================================================
// put_str
// ============================================================================

#[test]
fn test_put_str_writes_and_returns_next_column() {
    let mut buf = Buffer::new(10, 2);
    let end = buf.put_str(2, 1, 10, "abc", brush());

    assert_eq!(end, 5);
    assert_eq!(buf.row_text(1), "  abc     ");
    let cell = buf.get(3, 1).unwrap();
    assert_eq!(cell.char, 'b');
    assert_eq!(cell.fg, Rgb::new(10, 20, 30));
    assert!(cell.style.bold);
}

#[test]
fn test_put_str_clips_at_max_x() {
    let mut buf = Buffer::new(10, 1);
    let end = buf.put_str(0, 0, 4, "abcdef", brush());

    assert_eq!(end, 4);
    assert_eq!(buf.row_text(0), "abcd      ");
}

#[test]
fn test_put_str_wide_chars_take_two_cells() {
    let mut buf = Buffer::new(6, 1);
    let end = buf.put_str(0, 0, 6, "日x", brush());

    assert_eq!(end, 3);
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.row_text(0), "日x   ");
}

#[test]
fn test_put_str_drops_straddling_wide_char() {
    let mut buf = Buffer::new(6, 1);
    let end = buf.put_str(0, 0, 3, "ab日", brush());

    assert_eq!(end, 2);
    assert_eq!(buf.get(2, 0).unwrap().char, ' ');
}

#[test]
fn test_put_str_out_of_bounds_row_is_noop() {
    let mut buf = Buffer::new(4, 1);
    assert_eq!(buf.put_str(0, 5, 4, "abc", brush()), 0);
}

// ============================================================================
// diff / fill
// ============================================================================

#[test]
fn test_diff_reports_changed_cells_only() {
    let previous = Buffer::new(4, 2);
    let mut current = Buffer::new(4, 2);
    current.put_str(1, 1, 4, "z", brush());

    let changed: Vec<_> = current.diff(&previous).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, vec![(1, 1, 'z')]);
}

#[test]
fn test_fill_paints_background() {
    let mut buf = Buffer::new(5, 1);
    buf.put_str(0, 0, 5, "hello", brush());
    buf.fill(1, 0, 10, Rgb::new(1, 2, 3));

    assert_eq!(buf.row_text(0), "h    ");
    assert_eq!(buf.get(4, 0).unwrap().bg, Rgb::new(1, 2, 3));
}

#[test]
fn test_clear_resets_cells() {
    let mut buf = Buffer::new(3, 1);
    buf.put_str(0, 0, 3, "abc", brush());
    buf.clear();
    assert_eq!(buf.get(0, 0), Some(&Cell::default()));
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_rgb_passthrough() {
    assert_eq!(Color::rgb(12, 34, 56).to_rgb(), Rgb::new(12, 34, 56));
}

#[test]
fn test_oklch_extremes() {
    assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
    assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
}

#[test]
fn test_mix_endpoints() {
    let black = Color::rgb(0, 0, 0);
    let white = Color::rgb(255, 255, 255);
    assert_eq!(black.mix(white, 0.0).to_rgb(), Rgb::new(0, 0, 0));
    assert_eq!(black.mix(white, 1.0).to_rgb(), Rgb::new(255, 255, 255));
}

#[test]
fn test_lighten_raises_lightness() {
    let base = Color::rgb(40, 40, 40);
    let lighter = base.lighten(0.2).to_rgb();
    assert!(lighter.r > 40 && lighter.g > 40 && lighter.b > 40);
}
