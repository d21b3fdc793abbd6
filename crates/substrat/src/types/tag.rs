use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{Path, Span};

/// The two delimiter pairs a tag can use.
///
/// Both kinds are resolved the same way; `{% %}` is recognized but never
/// evaluated as a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// `{{ ... }}`
    Expression,
    /// `{% ... %}`
    Statement,
}

impl Delimiter {
    pub fn open(self) -> &'static str {
        match self {
            Delimiter::Expression => "{{",
            Delimiter::Statement => "{%",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Delimiter::Expression => "}}",
            Delimiter::Statement => "%}",
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Delimiter::Expression => write!(f, "expression"),
            Delimiter::Statement => write!(f, "statement"),
        }
    }
}

/// One tag occurrence found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Where the tag sits, delimiters included.
    pub span: Span,
    pub delimiter: Delimiter,
    /// Surface text, delimiters included.
    pub text: String,
}

impl Tag {
    /// The text between the delimiters, untrimmed.
    pub fn body(&self) -> &str {
        self.text
            .strip_prefix(self.delimiter.open())
            .and_then(|rest| rest.strip_suffix(self.delimiter.close()))
            .unwrap_or(&self.text)
    }

    /// The lookup path named by this tag.
    ///
    /// Stray braces left around the body, as in `{{{ name }}}`, are not part
    /// of the path.
    pub fn path(&self) -> Path {
        Path::parse(
            self.body()
                .trim_start_matches('{')
                .trim_end_matches('}'),
        )
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.span, self.text)
    }
}
