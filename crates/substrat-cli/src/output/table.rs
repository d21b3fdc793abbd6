//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use substrat::Tag;

/// Format scanned tags as an ASCII table.
pub fn format_tag_table(tags: &[Tag]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Range", "Kind", "Path"]);

    for tag in tags {
        let path = tag.path();
        table.add_row(vec![
            tag.span.key(),
            tag.delimiter.to_string(),
            if path.is_root() {
                "(root)".to_string()
            } else {
                path.to_string()
            },
        ]);
    }

    table
}
