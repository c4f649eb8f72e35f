use lineargs::{ArgumentDelimiter, WhitespaceDelimiter};
use pretty_assertions::assert_eq;

use crate::args;

fn delimit(buffer: &str, cursor: usize) -> lineargs::ArgumentList {
    WhitespaceDelimiter::default().delimit(buffer, cursor)
}

#[test]
fn caret_at_start_selects_first_argument() {
    let list = delimit("foo bar", 0);

    assert_eq!(args(&list), vec!["foo", "bar"]);
    assert_eq!(list.cursor_argument_index(), Some(0));
    assert_eq!(list.argument_position(), Some(0));
    assert_eq!(list.cursor_argument(), Some("foo"));
}

#[test]
fn caret_at_end_selects_last_argument() {
    let list = delimit("foo bar", 7);

    assert_eq!(args(&list), vec!["foo", "bar"]);
    assert_eq!(list.cursor_argument_index(), Some(1));
    assert_eq!(list.argument_position(), Some(3));
    assert_eq!(list.cursor_argument(), Some("bar"));
    assert_eq!(list.buffer_position(), 7);
}

#[test]
fn quoted_span_is_one_argument() {
    let list = delimit("foo \"bar baz\" qux", 9);

    assert_eq!(args(&list), vec!["foo", "bar baz", "qux"]);
    assert_eq!(list.cursor_argument_index(), Some(1));
    assert_eq!(list.argument_position(), Some(4));
    assert_eq!(list.cursor_argument(), Some("bar baz"));
}

#[test]
fn escaped_space_does_not_delimit() {
    let list = delimit("a\\ b", 4);

    assert_eq!(args(&list), vec!["a b"]);
    assert_eq!(list.cursor_argument_index(), Some(0));
    assert_eq!(list.argument_position(), Some(3));
}

#[test]
fn unterminated_quote_is_flushed_as_final_argument() {
    let list = delimit("foo \"bar", 8);

    assert_eq!(args(&list), vec!["foo", "bar"]);
    assert_eq!(list.cursor_argument(), Some("bar"));
}

#[test]
fn adjacent_quotes_yield_one_empty_argument() {
    let list = delimit("\"\"", 0);

    assert_eq!(args(&list), vec![""]);
    assert_eq!(list.cursor_argument_index(), Some(0));
    assert_eq!(list.argument_position(), Some(0));
    assert_eq!(list.cursor_argument(), Some(""));
}

#[test]
fn runs_of_whitespace_never_produce_empty_arguments() {
    let list = delimit("  foo \t\t bar\n baz  ", 0);

    assert_eq!(args(&list), vec!["foo", "bar", "baz"]);
}

#[test]
fn unicode_whitespace_delimits() {
    let list = delimit("foo\u{3000}bar\u{00a0}baz", 0);

    assert_eq!(args(&list), vec!["foo", "bar", "baz"]);
}

#[test]
fn empty_buffer_has_no_arguments() {
    let list = delimit("", 0);

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.cursor_argument_index(), Some(0));
    assert_eq!(list.cursor_argument(), None);
}

#[test]
fn whitespace_only_buffer_has_no_arguments() {
    let list = delimit(" \t ", 1);

    assert!(list.is_empty());
    assert_eq!(list.cursor_argument(), None);
}
