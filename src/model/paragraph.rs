//! Paragraph type.

use serde::{Deserialize, Serialize};

/// A body paragraph with its resolved style name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text (runs concatenated, may be empty)
    pub text: String,

    /// Resolved style name, e.g. "Heading 1" or "List Bullet"
    pub style_name: String,
}

impl Paragraph {
    /// Create a paragraph with text and style name.
    pub fn new(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: style_name.into(),
        }
    }

    /// Create a paragraph in the "Normal" style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, "Normal")
    }

    /// Get the text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.trimmed_text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_trim() {
        let p = Paragraph::plain("  Hello  ");
        assert_eq!(p.trimmed_text(), "Hello");
        assert!(!p.is_blank());
    }

    #[test]
    fn test_blank_paragraph() {
        assert!(Paragraph::plain("").is_blank());
        assert!(Paragraph::new(" \t\n ", "Heading 1").is_blank());
    }
}
