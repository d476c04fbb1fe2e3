//! Main document part reader.
//!
//! Walks `w:document/w:body` and collects the top-level paragraphs and
//! the top-level tables. Everything nested deeper (content controls,
//! text boxes, tables inside cells) is skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::styles::StyleSheet;
use super::xml::attr_value;
use crate::error::Result;
use crate::model::{Document, Paragraph, Table, TableCell, TableRow};

// Stack depths of the elements we collect, counting the root as depth 1:
// document(1) / body(2) / p|tbl(3) / tr(4) / tc(5) / p(6)
const BODY_ITEM_DEPTH: usize = 3;
const ROW_DEPTH: usize = 4;
const CELL_DEPTH: usize = 5;
const CELL_PARAGRAPH_DEPTH: usize = 6;

/// Text being collected for the paragraph currently open.
struct OpenParagraph {
    /// Stack depth of the `w:p` element
    depth: usize,
    text: String,
    style_id: Option<String>,
}

/// Parse the main document part.
pub(crate) fn parse_body(xml: &[u8], styles: &StyleSheet) -> Result<Document> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut walker = BodyWalker::new(styles);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => walker.start(e)?,
            Event::Empty(ref e) => {
                walker.start(e)?;
                walker.end();
            }
            Event::End(_) => walker.end(),
            Event::Text(ref t) => {
                if walker.in_text() {
                    let text = t.unescape()?;
                    walker.push_text(&text);
                }
            }
            Event::CData(ref t) => {
                if walker.in_text() {
                    walker.push_text(&String::from_utf8_lossy(t));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    log::debug!(
        "Parsed {} paragraphs and {} tables",
        walker.document.paragraph_count(),
        walker.document.table_count()
    );
    Ok(walker.document)
}

struct BodyWalker<'a> {
    styles: &'a StyleSheet,
    stack: Vec<Vec<u8>>,
    document: Document,
    paragraph: Option<OpenParagraph>,
    table: Option<Table>,
    row: Option<TableRow>,
    cell: Option<Vec<String>>,
}

impl<'a> BodyWalker<'a> {
    fn new(styles: &'a StyleSheet) -> Self {
        Self {
            styles,
            stack: Vec::new(),
            document: Document::new(),
            paragraph: None,
            table: None,
            row: None,
            cell: None,
        }
    }

    fn is_at(&self, depth: usize, parent: &[u8], name: &[u8]) -> bool {
        self.stack.len() == depth
            && self.stack[depth - 1] == name
            && self.stack[depth - 2] == parent
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        self.stack.push(e.local_name().as_ref().to_vec());

        if self.is_at(BODY_ITEM_DEPTH, b"body", b"p")
            || (self.cell.is_some() && self.is_at(CELL_PARAGRAPH_DEPTH, b"tc", b"p"))
        {
            self.paragraph = Some(OpenParagraph {
                depth: self.stack.len(),
                text: String::new(),
                style_id: None,
            });
        } else if self.is_at(BODY_ITEM_DEPTH, b"body", b"tbl") {
            self.table = Some(Table::new());
        } else if self.table.is_some() && self.is_at(ROW_DEPTH, b"tbl", b"tr") {
            self.row = Some(TableRow::default());
        } else if self.row.is_some() && self.is_at(CELL_DEPTH, b"tr", b"tc") {
            self.cell = Some(Vec::new());
        } else if self.paragraph.is_some() {
            self.paragraph_child(e)?;
        }

        Ok(())
    }

    /// Handle an element opened somewhere below the current paragraph.
    fn paragraph_child(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let Some(depth) = self.paragraph.as_ref().map(|p| p.depth) else {
            return Ok(());
        };
        let below = &self.stack[depth..];

        if below.len() == 2 && below[0] == b"pPr" && below[1] == b"pStyle" {
            let style_id = attr_value(e, b"val")?;
            if let Some(p) = self.paragraph.as_mut() {
                p.style_id = style_id;
            }
            return Ok(());
        }

        let piece = match self.run_child() {
            Some(b"tab") | Some(b"ptab") => "\t",
            Some(b"cr") => "\n",
            Some(b"noBreakHyphen") => "-",
            Some(b"br") => match attr_value(e, b"type")?.as_deref() {
                None | Some("textWrapping") => "\n",
                Some(_) => "",
            },
            _ => "",
        };
        if !piece.is_empty() {
            self.push_text(piece);
        }

        Ok(())
    }

    /// Local name of the innermost element if it is a direct child of a
    /// run that belongs to the current paragraph, either directly or
    /// through a hyperlink.
    fn run_child(&self) -> Option<&[u8]> {
        let depth = self.paragraph.as_ref()?.depth;
        let below = &self.stack[depth..];
        match below.len() {
            2 if below[0] == b"r" => Some(below[1].as_slice()),
            3 if below[0] == b"hyperlink" && below[1] == b"r" => Some(below[2].as_slice()),
            _ => None,
        }
    }

    fn in_text(&self) -> bool {
        matches!(self.run_child(), Some(b"t"))
    }

    fn push_text(&mut self, text: &str) {
        if let Some(p) = self.paragraph.as_mut() {
            p.text.push_str(text);
        }
    }

    fn end(&mut self) {
        let depth = self.stack.len();

        if self.paragraph.as_ref().is_some_and(|p| p.depth == depth) {
            self.close_paragraph();
        } else if depth == BODY_ITEM_DEPTH && self.table.is_some() {
            if let Some(table) = self.table.take() {
                self.document.add_table(table);
            }
        } else if depth == ROW_DEPTH && self.row.is_some() {
            if let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) {
                table.add_row(row);
            }
        } else if depth == CELL_DEPTH && self.cell.is_some() {
            if let (Some(paragraphs), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                row.cells.push(TableCell::text(paragraphs.join("\n")));
            }
        }

        self.stack.pop();
    }

    fn close_paragraph(&mut self) {
        let Some(p) = self.paragraph.take() else {
            return;
        };

        if p.depth == CELL_PARAGRAPH_DEPTH {
            if let Some(cell) = self.cell.as_mut() {
                cell.push(p.text);
            }
        } else {
            let style_name = self.styles.paragraph_style_name(p.style_id.as_deref());
            self.document.add_paragraph(Paragraph::new(p.text, style_name));
        }
    }
}
