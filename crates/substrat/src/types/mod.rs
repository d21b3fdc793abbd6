mod path;
mod span;
mod tag;
mod value;

pub use path::Path;
pub use span::{Position, RangeKeyError, Span};
pub use tag::{Delimiter, Tag};
pub use value::Value;
