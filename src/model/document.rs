//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed Word document.
///
/// Paragraphs and tables are kept in two separate sequences, each in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Body tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Count paragraphs per style name.
    pub fn style_usage(&self) -> BTreeMap<&str, usize> {
        let mut usage = BTreeMap::new();
        for p in &self.paragraphs {
            *usage.entry(p.style_name.as_str()).or_insert(0) += 1;
        }
        usage
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.clone())
            .chain(self.tables.iter().map(|t| t.plain_text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
