//! Style definitions from the styles part.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::xml::{attr_value, is_on};
use crate::error::Result;

/// Style type as declared by `w:style/@w:type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    /// Paragraph style (the default when the attribute is absent)
    #[default]
    Paragraph,
    /// Character (run) style
    Character,
    /// Table style
    Table,
    /// Numbering style
    Numbering,
}

impl StyleType {
    fn from_xml(value: &str) -> Option<Self> {
        match value {
            "paragraph" => Some(StyleType::Paragraph),
            "character" => Some(StyleType::Character),
            "table" => Some(StyleType::Table),
            "numbering" => Some(StyleType::Numbering),
            _ => None,
        }
    }
}

/// A single style definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDef {
    /// Style id referenced by `w:pStyle/@w:val`
    pub style_id: String,
    /// Style name from `w:name/@w:val`
    pub name: Option<String>,
    /// Style type
    pub style_type: StyleType,
    /// Whether this is the default style of its type
    pub is_default: bool,
}

impl StyleDef {
    /// Name shown to users.
    ///
    /// Word stores a handful of built-in names in lowercase ("heading 1");
    /// those are reported in their UI form. A style without a name
    /// reports its id.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) => ui_name(name).unwrap_or(name).to_string(),
            None => self.style_id.clone(),
        }
    }
}

/// Map built-in internal style names to their UI names.
fn ui_name(internal: &str) -> Option<&'static str> {
    let ui = match internal {
        "caption" => "Caption",
        "footer" => "Footer",
        "header" => "Header",
        "heading 1" => "Heading 1",
        "heading 2" => "Heading 2",
        "heading 3" => "Heading 3",
        "heading 4" => "Heading 4",
        "heading 5" => "Heading 5",
        "heading 6" => "Heading 6",
        "heading 7" => "Heading 7",
        "heading 8" => "Heading 8",
        "heading 9" => "Heading 9",
        _ => return None,
    };
    Some(ui)
}

/// Styles of a document, indexed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, StyleDef>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Style sheet used when a package has no styles part: a single
    /// default paragraph style named "Normal".
    pub fn builtin() -> Self {
        let mut sheet = StyleSheet::default();
        sheet.insert(StyleDef {
            style_id: "Normal".to_string(),
            name: Some("Normal".to_string()),
            style_type: StyleType::Paragraph,
            is_default: true,
        });
        sheet
    }

    /// Parse a styles part.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut sheet = StyleSheet::default();
        let mut current: Option<StyleDef> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => match e.local_name().as_ref() {
                    b"style" => current = Some(style_from_element(e)?),
                    b"name" => set_name(&mut current, e)?,
                    _ => {}
                },
                Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"style" => sheet.insert(style_from_element(e)?),
                    b"name" => set_name(&mut current, e)?,
                    _ => {}
                },
                Event::End(ref e) if e.local_name().as_ref() == b"style" => {
                    if let Some(style) = current.take() {
                        sheet.insert(style);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        log::debug!("Parsed {} styles", sheet.len());
        Ok(sheet)
    }

    fn insert(&mut self, style: StyleDef) {
        // Last default paragraph style wins, first definition of an id wins.
        if style.is_default && style.style_type == StyleType::Paragraph {
            self.default_paragraph = Some(style.style_id.clone());
        }
        self.styles.entry(style.style_id.clone()).or_insert(style);
    }

    /// Get the number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if there are no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Get a style by id.
    pub fn get(&self, style_id: &str) -> Option<&StyleDef> {
        self.styles.get(style_id)
    }

    /// Get the default paragraph style.
    pub fn default_paragraph_style(&self) -> Option<&StyleDef> {
        self.default_paragraph
            .as_deref()
            .and_then(|id| self.styles.get(id))
    }

    /// Resolve the style name of a paragraph from its `w:pStyle` id.
    ///
    /// Falls back to the default paragraph style when the id is absent,
    /// unknown, or names a non-paragraph style. Returns an empty string
    /// when nothing resolves.
    pub fn paragraph_style_name(&self, style_id: Option<&str>) -> String {
        let explicit = style_id.and_then(|id| {
            let style = self
                .styles
                .get(id)
                .filter(|s| s.style_type == StyleType::Paragraph);
            if style.is_none() {
                log::warn!("Paragraph style '{}' not found; using default style", id);
            }
            style
        });

        explicit
            .or_else(|| self.default_paragraph_style())
            .map(StyleDef::display_name)
            .unwrap_or_default()
    }
}

fn style_from_element(e: &BytesStart<'_>) -> Result<StyleDef> {
    let style_type = match attr_value(e, b"type")? {
        Some(value) => StyleType::from_xml(&value).unwrap_or_default(),
        None => StyleType::Paragraph,
    };
    Ok(StyleDef {
        style_id: attr_value(e, b"styleId")?.unwrap_or_default(),
        name: None,
        style_type,
        is_default: is_on(attr_value(e, b"default")?.as_deref()),
    })
}

fn set_name(current: &mut Option<StyleDef>, e: &BytesStart<'_>) -> Result<()> {
    if let Some(style) = current.as_mut() {
        if style.name.is_none() {
            style.name = attr_value(e, b"val")?;
        }
    }
    Ok(())
}
