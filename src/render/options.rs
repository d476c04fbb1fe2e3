//! Rendering options and configuration.

use super::rules::{default_rules, StyleRule};

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Paragraph style rules, evaluated in order; first match wins
    pub rules: Vec<StyleRule>,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the style rules.
    pub fn with_rules(mut self, rules: Vec<StyleRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Append a style rule after the existing ones.
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Enable or disable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.rules.len(), 5);
        assert_eq!(options.rules[0].prefix(), "# ");
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_rule(StyleRule::new("title", "# "))
            .with_stats(true);

        assert_eq!(options.rules.len(), 6);
        assert_eq!(options.rules[5].needle(), "title");
        assert!(options.collect_stats);

        let options = options.with_rules(Vec::new());
        assert!(options.rules.is_empty());
    }
}
