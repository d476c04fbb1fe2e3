//! Paragraph style rules.

/// Maps paragraphs whose style name contains `needle` to a line prefix.
///
/// Matching is a case-insensitive substring test on the style name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    needle: String,
    prefix: String,
}

impl StyleRule {
    /// Create a rule. The needle is stored lowercased.
    pub fn new(needle: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            needle: needle.into().to_lowercase(),
            prefix: prefix.into(),
        }
    }

    /// Lowercased needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Line prefix emitted before the paragraph text.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check a lowercased style name against this rule.
    pub fn matches(&self, style_lower: &str) -> bool {
        style_lower.contains(&self.needle)
    }

    /// Format paragraph text with this rule's prefix.
    pub fn format(&self, text: &str) -> String {
        format!("{}{}", self.prefix, text)
    }
}

/// Built-in rules, in priority order.
///
/// Numbered items always use the literal marker "1.", never a counter.
pub fn default_rules() -> Vec<StyleRule> {
    vec![
        StyleRule::new("heading 1", "# "),
        StyleRule::new("heading 2", "## "),
        StyleRule::new("heading 3", "### "),
        StyleRule::new("list bullet", "- "),
        StyleRule::new("list number", "1. "),
    ]
}

/// Find the first rule matching a style name.
pub(crate) fn find_rule<'r>(rules: &'r [StyleRule], style_name: &str) -> Option<&'r StyleRule> {
    let style_lower = style_name.to_lowercase();
    rules.iter().find(|rule| rule.matches(&style_lower))
}
