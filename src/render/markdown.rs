//! Markdown rendering for Word documents.

use crate::error::Result;
use crate::model::{Document, Paragraph, Table};

use super::rules::find_rule;
use super::{RenderOptions, RenderResult, RenderStats};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Render a document to its output lines, before joining.
pub fn render_lines(doc: &Document, options: &RenderOptions) -> Vec<String> {
    let mut renderer = MarkdownRenderer::new(options.clone());
    renderer.render_internal(doc)
}

/// Markdown renderer.
///
/// Emits every paragraph first, then every table, each in document order.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let lines = self.render_internal(doc);
        Ok(lines.join("\n"))
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let lines = self.render_internal(doc);
        self.stats.line_count = lines.len() as u32;
        Ok(RenderResult::new(lines.join("\n"), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Vec<String> {
        let mut lines = Vec::new();

        for para in &doc.paragraphs {
            self.render_paragraph(&mut lines, para);
        }

        for table in &doc.tables {
            self.render_table(&mut lines, table);
        }

        lines
    }

    fn render_paragraph(&mut self, lines: &mut Vec<String>, para: &Paragraph) {
        if para.is_blank() {
            if self.options.collect_stats {
                self.stats.add_blank();
            }
            lines.push(String::new());
            return;
        }

        let text = para.trimmed_text();
        match find_rule(&self.options.rules, &para.style_name) {
            Some(rule) => {
                if self.options.collect_stats {
                    self.stats.add_prefixed(rule.prefix());
                }
                lines.push(rule.format(text));
            }
            None => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                lines.push(text.to_string());
            }
        }

        lines.push(String::new());
    }

    fn render_table(&mut self, lines: &mut Vec<String>, table: &Table) {
        if self.options.collect_stats {
            self.stats.add_table();
        }

        for row in &table.rows {
            if self.options.collect_stats {
                self.stats.add_table_row();
            }
            let cells: Vec<&str> = row.cells.iter().map(|c| c.text.trim()).collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }

        lines.push(String::new());
    }
}
