//! Implementation of the `substrat render` command.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use substrat::{Engine, MissingPath, DEFAULT_MAX_SUBSTITUTIONS};

use super::input::{load_data, parse_key_val, read_template};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template file to render (template text with --inline)
    pub template: String,

    /// Treat TEMPLATE as the template text instead of a file path
    #[arg(long)]
    pub inline: bool,

    /// JSON file with the data context
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Top-level data values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Stop after this many substitutions
    #[arg(long, default_value_t = DEFAULT_MAX_SUBSTITUTIONS)]
    pub max_substitutions: usize,

    /// Exit with non-zero code if a path is missing or the limit was reached
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Debug, Serialize)]
struct RenderJson {
    text: String,
    substitutions: usize,
    capped: bool,
    missing: Vec<MissingJson>,
}

/// JSON output for one missing path.
#[derive(Debug, Serialize)]
struct MissingJson {
    path: String,
    range: String,
    segment: String,
    suggestions: Vec<String>,
}

impl From<&MissingPath> for MissingJson {
    fn from(missing: &MissingPath) -> Self {
        MissingJson {
            path: missing.path.clone(),
            range: missing.span.key(),
            segment: missing.segment.clone(),
            suggestions: missing.suggestions.clone(),
        }
    }
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let template = read_template(&args.template, args.inline)?;

    let data = match load_data(args.data.as_deref(), &args.params) {
        Ok(data) => data,
        Err(report) => {
            eprintln!("{:?}", report);
            return Ok(exitcode::DATAERR);
        }
    };

    let engine = Engine::builder()
        .template(template)
        .data(data)
        .max_substitutions(args.max_substitutions)
        .build();
    let rendered = engine
        .render()
        .map_err(|e| miette::miette!("Render failed: {}", e))?;

    if args.json {
        let output = RenderJson {
            text: rendered.text.clone(),
            substitutions: rendered.substitutions,
            capped: rendered.capped,
            missing: rendered.missing.iter().map(MissingJson::from).collect(),
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
        println!("{}", json);
    } else {
        println!("{}", rendered.text);
    }

    if rendered.capped {
        warn(&format!(
            "stopped after {} substitutions; tags remain in the output",
            rendered.substitutions
        ));
    }

    if args.strict {
        for missing in &rendered.missing {
            warn(&describe_missing(missing));
        }
        if rendered.capped || !rendered.missing.is_empty() {
            return Ok(exitcode::DATAERR);
        }
    }

    Ok(exitcode::OK)
}

/// Print a warning line to stderr.
fn warn(message: &str) {
    eprintln!(
        "{} {}",
        "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message
    );
}

/// Human-readable description of a missing path.
fn describe_missing(missing: &MissingPath) -> String {
    let mut message = format!(
        "{}: '{}' not found (no '{}')",
        missing.span, missing.path, missing.segment
    );
    if !missing.suggestions.is_empty() {
        message.push_str(&format!(", did you mean: {}?", missing.suggestions.join(", ")));
    }
    message
}
