//! CLI command implementations.

mod input;
mod render;
mod tags;

pub use render::{run_render, RenderArgs};
pub use tags::{run_tags, TagsArgs};
