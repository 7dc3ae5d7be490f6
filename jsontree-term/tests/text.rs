use jsontree_term::text::{char_width, display_width, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('▼'), 1);
    assert_eq!(char_width('\u{301}'), 0);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_wide_does_not_split_glyph() {
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("日", 3), "日 ");
    assert_eq!(pad_to_width("abcdef", 3), "abcdef");
}
