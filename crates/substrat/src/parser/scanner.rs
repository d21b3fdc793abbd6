//! Tag scanner using winnow.
//!
//! Each line is scanned on its own, so a tag never crosses a line break.
//! At every position the `{{` form is tried before `{%`, and the body runs
//! to the first matching closer, so adjacent tags never merge.

use winnow::combinator::alt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_until;

use crate::lines::split_lines;
use crate::types::{Delimiter, Span, Tag};

/// Scan text for tags, in ascending line then column order.
///
/// Lines and columns are 1-based. Text without tags yields an empty vec.
///
/// # Example
///
/// ```
/// use substrat::scan_tags;
///
/// let tags = scan_tags("Hi {{ name }}!\n{% x %}");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0].span.key(), "1:4-1:13");
/// assert_eq!(tags[1].span.key(), "2:1-2:7");
/// ```
pub fn scan_tags(text: &str) -> Vec<Tag> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .flat_map(|(index, line)| scan_line(line, index + 1))
        .collect()
}

/// Scan a single line, reporting tags as being on line `line_number`.
pub fn scan_line(line: &str, line_number: usize) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut remaining = line;
    // Characters consumed so far; the next character is at column + 1.
    let mut column = 0;

    while !remaining.is_empty() {
        let checkpoint = remaining;
        match tag(&mut remaining) {
            Ok((delimiter, text)) => {
                let len = text.chars().count();
                tags.push(Tag {
                    span: Span::on_line(line_number, column + 1, len),
                    delimiter,
                    text: text.to_string(),
                });
                column += len;
            }
            Err(_) => {
                remaining = checkpoint;
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str();
                column += 1;
            }
        }
    }

    tags
}

/// Parse one tag at the start of the input, returning its surface text.
fn tag<'i>(input: &mut &'i str) -> ModalResult<(Delimiter, &'i str)> {
    alt((delimited_by(Delimiter::Expression), delimited_by(Delimiter::Statement))).parse_next(input)
}

/// Parser for the shortest `open ... close` run of one delimiter kind.
fn delimited_by<'i>(
    delimiter: Delimiter,
) -> impl Parser<&'i str, (Delimiter, &'i str), ErrMode<ContextError>> {
    (
        delimiter.open(),
        take_until(0.., delimiter.close()),
        delimiter.close(),
    )
        .take()
        .map(move |text| (delimiter, text))
}
