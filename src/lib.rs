//! # docmark
//!
//! Word (.docx) to Markdown conversion library for Rust.
//!
//! This library reads the paragraphs and tables of a WordprocessingML
//! package and renders them as lightweight Markdown: style-based heading
//! and list prefixes, pipe-delimited table rows, blank-line separators.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docmark::{parse_file, render};
//!
//! fn main() -> docmark::Result<()> {
//!     // Parse a Word file
//!     let doc = parse_file("document.docx")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! - Paragraphs first, in document order, then tables in document order
//! - `# `, `## `, `### ` for "Heading 1".."Heading 3" styles
//! - `- ` for "List Bullet" and `1. ` for "List Number" styles
//! - `| a | b |` per table row

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert, ConvertReport, Converter};
pub use detect::{is_zip_bytes, DocxFormat};
pub use error::{Error, ErrorKind, Result};
pub use model::{Document, Paragraph, Table, TableCell, TableRow};
pub use parser::DocxParser;
pub use render::{JsonFormat, RenderOptions, StyleRule};

use std::io::Read;
use std::path::Path;

/// Parse a Word file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the .docx file
///
/// # Example
///
/// ```no_run
/// use docmark::parse_file;
///
/// let doc = parse_file("document.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a Word document from bytes.
///
/// # Example
///
/// ```no_run
/// use docmark::parse_bytes;
///
/// let data = std::fs::read("document.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a Word document from a reader.
///
/// # Example
///
/// ```no_run
/// use docmark::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let mut parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Convert a Word file to a Markdown string.
///
/// # Example
///
/// ```no_run
/// use docmark::to_markdown;
///
/// let markdown = to_markdown("document.docx").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a Word file to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Convert a Word file to JSON.
///
/// # Example
///
/// ```no_run
/// use docmark::{to_json, JsonFormat};
///
/// let json = to_json("document.docx", JsonFormat::Pretty).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}
