//! Range splicing over line/column coordinates.

use thiserror::Error;

use crate::lines::{join_lines, split_lines};
use crate::types::Span;

/// An error raised while splicing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    /// The span names a line the text does not have, or ends before it
    /// starts. Tag spans from the scanner are always in range, so this
    /// indicates a bug rather than bad input.
    #[error("malformed range {span}: text has {line_count} line(s)")]
    MalformedRange { span: Span, line_count: usize },
}

/// Replace the text covered by `span` with `replacement`.
///
/// Coordinates are 1-based and inclusive at both ends; columns beyond the
/// end of a line are clamped to it. The prefix of the start line before
/// `span.start`, the replacement and the suffix of the end line after
/// `span.end` become a single line. Any lines strictly between the two are
/// dropped, so a multi-line span collapses into one line.
///
/// Lines are split on any line ending and rejoined with `\n`.
///
/// # Example
///
/// ```
/// use substrat::{Position, Span, splice};
///
/// let span = Span::new(Position::new(1, 7), Position::new(1, 14));
/// assert_eq!(splice("Hello {{name}}!", &span, "Ada").unwrap(), "Hello Ada!");
/// ```
pub fn splice(text: &str, span: &Span, replacement: &str) -> Result<String, SpliceError> {
    let lines = split_lines(text);
    let line_count = lines.len();
    let in_range = |line: usize| (1..=line_count).contains(&line);
    if !in_range(span.start.line) || !in_range(span.end.line) || span.end.line < span.start.line {
        return Err(SpliceError::MalformedRange {
            span: *span,
            line_count,
        });
    }

    let first = span.start.line - 1;
    let last = span.end.line - 1;

    let head = before_column(lines[first], span.start.column);
    let tail = after_column(lines[last], span.end.column);
    let mut merged = String::with_capacity(head.len() + replacement.len() + tail.len());
    merged.push_str(head);
    merged.push_str(replacement);
    merged.push_str(tail);

    let mut result: Vec<&str> = Vec::with_capacity(line_count - (last - first));
    result.extend_from_slice(&lines[..first]);
    result.push(&merged);
    result.extend_from_slice(&lines[last + 1..]);
    Ok(join_lines(&result))
}

/// The part of `line` before 1-based `column`.
fn before_column(line: &str, column: usize) -> &str {
    &line[..byte_offset(line, column.saturating_sub(1))]
}

/// The part of `line` after 1-based `column`.
fn after_column(line: &str, column: usize) -> &str {
    &line[byte_offset(line, column)..]
}

/// Byte offset of the character at index `chars`, clamped to the line end.
fn byte_offset(line: &str, chars: usize) -> usize {
    line.char_indices()
        .nth(chars)
        .map_or(line.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_offset_counts_characters() {
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("abc", 10), 3);
    }

    #[test]
    fn before_column_one_is_empty() {
        assert_eq!(before_column("abc", 1), "");
        assert_eq!(before_column("abc", 0), "");
    }

    #[test]
    fn after_last_column_is_empty() {
        assert_eq!(after_column("abc", 3), "");
        assert_eq!(after_column("abc", 2), "c");
    }
}
