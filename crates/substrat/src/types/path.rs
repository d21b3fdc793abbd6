use std::fmt::{Display, Formatter, Result as FmtResult};

/// A dot-separated lookup path into the data context.
///
/// Surrounding whitespace is ignored. An empty (or all-whitespace) path has
/// zero segments and refers to the data context itself.
///
/// # Example
///
/// ```
/// use substrat::Path;
///
/// assert_eq!(Path::parse(" user.name ").segments(), ["user", "name"]);
/// assert!(Path::parse("").is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Self::root();
        }
        Self(trimmed.split('.').map(str::to_string).collect())
    }

    /// The path with no segments.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.join("."))
    }
}
