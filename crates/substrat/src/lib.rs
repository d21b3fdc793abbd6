//! Substrat: line/column tag substitution for text templates.
//!
//! Tags are `{{ path }}` or `{% path %}` on a single line. Each path is a
//! dot-separated lookup into a [`Value`], and the tag's exact character
//! range is replaced with the value found there (or nothing, when the path
//! does not resolve).
//!
//! ```
//! use substrat::{data, replace_all};
//!
//! let out = replace_all("Hello, {{ who }}!", data! { "who" => "world" }).unwrap();
//! assert_eq!(out, "Hello, world!");
//! ```

pub mod engine;
pub mod lines;
pub mod parser;
pub mod resolver;
pub mod splice;
pub mod types;

pub use engine::{DEFAULT_MAX_SUBSTITUTIONS, Engine, MissingPath, Rendered, replace_all};
pub use parser::scan_tags;
pub use resolver::{Resolution, resolve, walk};
pub use splice::{SpliceError, splice};
pub use types::{Delimiter, Path, Position, RangeKeyError, Span, Tag, Value};

/// Creates a `Value::Map` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, vectors or nested `data!` maps directly.
///
/// # Example
///
/// ```
/// use substrat::{Value, data};
///
/// let d = data! { "count" => 3, "user" => data! { "name" => "Alice" } };
/// assert_eq!(d.lookup("count").and_then(Value::as_number), Some(3));
/// assert_eq!(d.lookup("user.name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        $crate::Value::Map(::std::collections::BTreeMap::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Map(map)
        }
    };
}
