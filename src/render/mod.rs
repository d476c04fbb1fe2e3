//! Rendering module for converting documents to output formats.

mod json;
mod markdown;
mod options;
mod result;
mod rules;

pub use json::{to_json, JsonFormat};
pub use markdown::{render_lines, to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use rules::{default_rules, StyleRule};
