//! The substitution engine.
//!
//! The engine repeatedly scans the working text, substitutes the first tag,
//! and scans again. Every splice moves the tags after it, so positions from
//! an earlier scan are never reused.

use bon::Builder;
use tracing::{debug, trace, warn};

use crate::parser::scan_tags;
use crate::resolver::{Resolution, suggest_keys, walk};
use crate::splice::{SpliceError, splice};
use crate::types::{Span, Value};

/// Upper bound on substitutions performed by one render.
///
/// Guards against templates whose substituted values contain further tags.
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 200;

/// A template bound to its data context.
///
/// # Example
///
/// ```
/// use substrat::{Engine, data};
///
/// let engine = Engine::new(
///     "<p>{{ user.name }}</p>",
///     data! { "user" => data! { "name" => "Ada" } },
/// );
/// assert_eq!(engine.replace_all().unwrap(), "<p>Ada</p>");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Engine {
    /// Template text, never modified.
    template: String,

    /// Data context tags are resolved against.
    #[builder(into, default)]
    data: Value,

    /// Render stops after this many substitutions, even if tags remain.
    /// At least one substitution is always attempted.
    #[builder(default = DEFAULT_MAX_SUBSTITUTIONS)]
    max_substitutions: usize,
}

/// The result of a render, with details about how it went.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// The substituted text.
    pub text: String,
    /// Number of tags replaced.
    pub substitutions: usize,
    /// True when the substitution limit stopped the render with tags left.
    pub capped: bool,
    /// Paths that resolved to nothing, in first-seen order.
    pub missing: Vec<MissingPath>,
}

/// A tag path that did not resolve and was replaced with the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPath {
    /// The path as written in the tag, trimmed.
    pub path: String,
    /// Span of the first tag that used this path, in the text as it was
    /// when that tag was substituted.
    pub span: Span,
    /// The first segment that could not be taken, either because the key is
    /// absent or because the value before it is not a container.
    pub segment: String,
    /// Nearby keys at the level where resolution stopped.
    pub suggestions: Vec<String>,
}

/// Where the engine's loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done { capped: bool },
}

impl Engine {
    /// Create an engine with the default substitution limit.
    pub fn new(template: impl Into<String>, data: impl Into<Value>) -> Self {
        Engine::builder().template(template).data(data).build()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn max_substitutions(&self) -> usize {
        self.max_substitutions
    }

    /// Substitute every tag and return the resulting text.
    ///
    /// Missing paths become empty strings. A template without tags comes
    /// back unchanged, line endings included; any substitution normalizes
    /// line endings to `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::MalformedRange`] only if a scanned span does
    /// not fit the text it was scanned from.
    pub fn replace_all(&self) -> Result<String, SpliceError> {
        self.render().map(|rendered| rendered.text)
    }

    /// Substitute every tag and report what happened.
    pub fn render(&self) -> Result<Rendered, SpliceError> {
        let mut rendered = Rendered {
            text: self.template.clone(),
            ..Rendered::default()
        };
        let mut state = State::Scanning;

        while state == State::Scanning {
            let tags = scan_tags(&rendered.text);
            trace!(tags = tags.len(), "scanned template");

            let Some(tag) = tags.first() else {
                state = State::Done { capped: false };
                continue;
            };

            let path = tag.path();
            let replacement = match walk(&self.data, &path) {
                Resolution::Found(value) => {
                    debug!(range = %tag.span, path = %path, "substituting tag");
                    value.to_string()
                }
                Resolution::Missing { index, parent } => {
                    debug!(range = %tag.span, path = %path, "path not found");
                    let segment = &path.segments()[index];
                    record_missing(&mut rendered.missing, MissingPath {
                        path: path.to_string(),
                        span: tag.span,
                        segment: segment.clone(),
                        suggestions: suggest_keys(segment, parent),
                    });
                    String::new()
                }
            };

            rendered.text = splice(&rendered.text, &tag.span, &replacement)?;
            rendered.substitutions += 1;

            if rendered.substitutions >= self.max_substitutions {
                let remaining = scan_tags(&rendered.text).len();
                if remaining > 0 {
                    warn!(
                        limit = self.max_substitutions,
                        remaining, "substitution limit reached, tags left unsubstituted"
                    );
                }
                state = State::Done {
                    capped: remaining > 0,
                };
            }
        }

        rendered.capped = matches!(state, State::Done { capped: true });
        Ok(rendered)
    }
}

/// Record a missing path unless the same path was already recorded.
fn record_missing(missing: &mut Vec<MissingPath>, entry: MissingPath) {
    if !missing.iter().any(|m| m.path == entry.path) {
        missing.push(entry);
    }
}

/// Substitute every tag of `template` against `data`.
///
/// Shorthand for `Engine::new(template, data).replace_all()`.
pub fn replace_all(template: &str, data: impl Into<Value>) -> Result<String, SpliceError> {
    Engine::new(template, data).replace_all()
}
