//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Paragraphs rendered with a heading prefix
    pub heading_count: u32,

    /// Paragraphs rendered with a list prefix
    pub list_item_count: u32,

    /// Paragraphs rendered as plain text
    pub paragraph_count: u32,

    /// Paragraphs that were empty after trimming
    pub blank_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Table rows rendered
    pub table_row_count: u32,

    /// Output lines produced
    pub line_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a paragraph rendered with the given prefix.
    ///
    /// Heading prefixes start with '#'; every other non-empty prefix is a
    /// list marker.
    pub fn add_prefixed(&mut self, prefix: &str) {
        if prefix.starts_with('#') {
            self.heading_count += 1;
        } else if prefix.is_empty() {
            self.paragraph_count += 1;
        } else {
            self.list_item_count += 1;
        }
    }

    /// Increment plain paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment blank paragraph count.
    pub fn add_blank(&mut self) {
        self.blank_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment table row count.
    pub fn add_table_row(&mut self) {
        self.table_row_count += 1;
    }

    /// Total paragraphs seen, blank ones included.
    pub fn total_paragraphs(&self) -> u32 {
        self.heading_count + self.list_item_count + self.paragraph_count + self.blank_count
    }
}
