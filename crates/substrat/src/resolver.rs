//! Path resolution against the data context.
//!
//! A missing key is an ordinary outcome, never an error: templates often
//! reference optional data.

use strsim::levenshtein;

use crate::types::{Path, Value};

/// The outcome of walking a path, with enough detail to explain a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Every segment resolved; this is the terminal value.
    Found(&'a Value),

    /// The segment at `index` could not be taken from `parent`, either
    /// because the key is absent or because `parent` is not a container.
    Missing { index: usize, parent: &'a Value },
}

impl<'a> Resolution<'a> {
    /// The resolved value, if any.
    pub fn found(self) -> Option<&'a Value> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::Missing { .. } => None,
        }
    }
}

/// Resolve `path` against `data`.
///
/// A path with no segments returns `data` itself. Terminal values are
/// returned as-is, containers included.
///
/// # Example
///
/// ```
/// use substrat::{Path, Value, data, resolve};
///
/// let data = data! { "a" => data! { "b" => "X" } };
/// assert_eq!(resolve(&data, &Path::parse("a.b")), Some(&Value::from("X")));
/// assert_eq!(resolve(&data, &Path::parse("a.missing.c")), None);
/// assert_eq!(resolve(&data, &Path::root()), Some(&data));
/// ```
pub fn resolve<'a>(data: &'a Value, path: &Path) -> Option<&'a Value> {
    walk(data, path).found()
}

/// Walk `path` through `data` one segment at a time.
pub fn walk<'a>(data: &'a Value, path: &Path) -> Resolution<'a> {
    let mut cursor = data;
    for (index, segment) in path.segments().iter().enumerate() {
        match cursor.get(segment) {
            Some(next) => cursor = next,
            None => {
                return Resolution::Missing {
                    index,
                    parent: cursor,
                };
            }
        }
    }
    Resolution::Found(cursor)
}

/// Keys of `parent` that are close to the segment that failed to resolve.
///
/// - distance <= 1 for segments of 3 characters or fewer
/// - distance <= 2 for longer segments
/// - At most 3 suggestions, closest first
pub fn suggest_keys(segment: &str, parent: &Value) -> Vec<String> {
    let max_distance = if segment.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = parent
        .child_keys()
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(segment, &candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
