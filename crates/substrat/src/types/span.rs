use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 1-based line/column location in template text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive range of text between two positions.
///
/// The `Display` form is the range key, `startLine:startCol-endLine:endCol`,
/// which `FromStr` parses back.
///
/// # Example
///
/// ```
/// use substrat::{Position, Span};
///
/// let span = Span::new(Position::new(2, 5), Position::new(2, 11));
/// assert_eq!(span.key(), "2:5-2:11");
/// assert_eq!("2:5-2:11".parse::<Span>().unwrap(), span);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A span covering `len` characters of one line, starting at `column`.
    pub fn on_line(line: usize, column: usize, len: usize) -> Self {
        Self {
            start: Position::new(line, column),
            end: Position::new(line, column + len.saturating_sub(1)),
        }
    }

    /// The canonical range key for this span.
    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A range key that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid range key '{key}': expected line:column-line:column")]
pub struct RangeKeyError {
    pub key: String,
}

impl FromStr for Span {
    type Err = RangeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RangeKeyError { key: s.to_string() };
        let (from, to) = s.split_once('-').ok_or_else(invalid)?;
        let start = parse_position(from).ok_or_else(invalid)?;
        let end = parse_position(to).ok_or_else(invalid)?;
        Ok(Span { start, end })
    }
}

fn parse_position(s: &str) -> Option<Position> {
    let (line, column) = s.split_once(':')?;
    Some(Position {
        line: line.trim().parse().ok()?,
        column: column.trim().parse().ok()?,
    })
}
