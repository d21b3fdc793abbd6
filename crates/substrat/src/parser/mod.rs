//! Tag scanner for Substrat templates.
//!
//! Finds `{{ ... }}` and `{% ... %}` occurrences line by line and reports
//! each one with its line/column span.

mod scanner;

pub use scanner::{scan_line, scan_tags};
