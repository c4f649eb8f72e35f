use lineargs::{ArgumentDelimiter, ArgumentList, WhitespaceDelimiter};
use pretty_assertions::assert_eq;

use crate::args;
use crate::escape::{EscapeParity, is_active_escape, is_escaped};

const ESCAPES: [char; 1] = ['\\'];

fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

fn delimit(buffer: &str) -> ArgumentList {
    WhitespaceDelimiter::default().delimit(buffer, 0)
}

#[test]
fn runs_of_escapes_alternate_parity() {
    let buffer = chars("\\\\\\x");

    assert!(is_active_escape(&buffer, 0, &ESCAPES));
    assert!(!is_active_escape(&buffer, 1, &ESCAPES));
    assert!(is_active_escape(&buffer, 2, &ESCAPES));
    assert!(!is_active_escape(&buffer, 3, &ESCAPES));

    assert!(!is_escaped(&buffer, 0, &ESCAPES));
    assert!(is_escaped(&buffer, 1, &ESCAPES));
    assert!(!is_escaped(&buffer, 2, &ESCAPES));
    assert!(is_escaped(&buffer, 3, &ESCAPES));
}

#[test]
fn out_of_range_positions_are_neither_escaped_nor_active() {
    let buffer = chars("\\");

    assert!(!is_active_escape(&buffer, 1, &ESCAPES));
    assert!(!is_escaped(&buffer, 5, &ESCAPES));
    assert!(!is_active_escape(&[], 0, &ESCAPES));
    assert!(!is_escaped(&[], 0, &ESCAPES));
}

#[test]
fn escape_after_literal_escape_is_active_again() {
    let buffer = chars("a\\\\\\ b");

    // a, active, literal, active, escaped space
    assert!(is_escaped(&buffer, 4, &ESCAPES));
}

#[test]
fn streaming_parity_matches_lookback() {
    let buffer = chars("x\\\\\\\\y\\ z\\");
    let mut parity = EscapeParity::default();

    for (pos, &ch) in buffer.iter().enumerate() {
        assert_eq!(parity.is_escaped(), is_escaped(&buffer, pos, &ESCAPES));
        assert_eq!(
            parity.observe(ch, &ESCAPES),
            is_active_escape(&buffer, pos, &ESCAPES)
        );
    }
}

#[test]
fn double_escape_yields_literal_escape() {
    assert_eq!(args(&delimit("a\\\\b")), vec!["a\\b"]);
}

#[test]
fn triple_escape_yields_literal_escape_and_escaped_space() {
    assert_eq!(args(&delimit("a\\\\\\ b")), vec!["a\\ b"]);
}

#[test]
fn quadruple_escape_leaves_space_delimiting() {
    assert_eq!(args(&delimit("a\\\\\\\\ b")), vec!["a\\\\", "b"]);
}

#[test]
fn trailing_escape_is_consumed() {
    let list = WhitespaceDelimiter::default().delimit("foo\\", 4);

    assert_eq!(args(&list), vec!["foo"]);
    assert_eq!(list.cursor_argument_index(), Some(0));
    assert_eq!(list.argument_position(), Some(3));
}

#[test]
fn lone_escape_produces_no_argument() {
    let list = WhitespaceDelimiter::default().delimit("\\", 1);

    assert!(list.is_empty());
    assert_eq!(list.cursor_argument(), None);
}
