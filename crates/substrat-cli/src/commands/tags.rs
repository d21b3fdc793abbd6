//! Implementation of the `substrat tags` command.

use serde::Serialize;
use substrat::{scan_tags, Delimiter, Tag};

use super::input::read_template;
use crate::output::table::format_tag_table;

/// Arguments for the tags command.
#[derive(Debug, clap::Args)]
pub struct TagsArgs {
    /// Template file to scan (template text with --inline)
    pub template: String,

    /// Treat TEMPLATE as the template text instead of a file path
    #[arg(long)]
    pub inline: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one tag.
#[derive(Debug, Serialize)]
struct TagJson {
    range: String,
    kind: Delimiter,
    text: String,
    path: String,
}

impl From<&Tag> for TagJson {
    fn from(tag: &Tag) -> Self {
        TagJson {
            range: tag.span.key(),
            kind: tag.delimiter,
            text: tag.text.clone(),
            path: tag.path().to_string(),
        }
    }
}

/// Run the tags command.
pub fn run_tags(args: TagsArgs) -> miette::Result<i32> {
    let template = read_template(&args.template, args.inline)?;
    let tags = scan_tags(&template);

    if args.json {
        let output: Vec<TagJson> = tags.iter().map(TagJson::from).collect();
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
        println!("{}", json);
    } else if tags.is_empty() {
        println!("No tags found.");
    } else {
        println!("{}", format_tag_table(&tags));
    }

    Ok(exitcode::OK)
}
