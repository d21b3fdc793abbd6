//! Tests for positions, spans and range keys.

use substrat::{Position, RangeKeyError, Span};

#[test]
fn key_format() {
    let span = Span::new(Position::new(3, 4), Position::new(3, 12));
    assert_eq!(span.key(), "3:4-3:12");
    assert_eq!(span.to_string(), "3:4-3:12");
}

#[test]
fn on_line_uses_inclusive_end() {
    let span = Span::on_line(2, 5, 4);
    assert_eq!(span.key(), "2:5-2:8");
    assert!(span.is_single_line());
}

#[test]
fn parses_range_keys() {
    let span: Span = "1:2-3:4".parse().unwrap();
    assert_eq!(span.start, Position::new(1, 2));
    assert_eq!(span.end, Position::new(3, 4));
    assert!(!span.is_single_line());
}

#[test]
fn rejects_malformed_range_keys() {
    for key in ["", "1:2", "1:2-3", "a:b-c:d", "1-2"] {
        assert_eq!(
            key.parse::<Span>(),
            Err(RangeKeyError {
                key: key.to_string()
            }),
            "key {key:?} should not parse"
        );
    }
}

#[test]
fn range_key_error_message() {
    let err = "oops".parse::<Span>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid range key 'oops': expected line:column-line:column"
    );
}

#[test]
fn spans_order_by_line_then_column() {
    let a = Span::on_line(1, 9, 3);
    let b = Span::on_line(2, 1, 3);
    let c = Span::on_line(1, 2, 3);
    let mut spans = vec![a, b, c];
    spans.sort();
    assert_eq!(spans, vec![c, a, b]);
}
