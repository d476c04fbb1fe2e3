//! Document model types for Word content representation.
//!
//! This module defines the intermediate representation that bridges
//! package parsing and Markdown rendering. It only carries what the
//! renderer consumes: paragraph text with its style label, and tables
//! of plain-text cells.

mod document;
mod paragraph;
mod table;

pub use document::Document;
pub use paragraph::Paragraph;
pub use table::{Table, TableCell, TableRow};
