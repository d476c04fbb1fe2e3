//! Word document parser.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use super::body::parse_body;
use super::package::Package;
use super::styles::StyleSheet;
use crate::detect::{check_zip_header, is_zip_bytes, DocxFormat};
use crate::error::{Error, Result};
use crate::model::Document;

/// Relationship type suffix of the styles part.
const REL_STYLES: &str = "/styles";
const DEFAULT_STYLES_PART: &str = "word/styles.xml";

/// Word (.docx) document parser.
pub struct DocxParser<R: Read + Seek> {
    package: Package<R>,
    main_part: String,
    format: DocxFormat,
}

impl DocxParser<BufReader<File>> {
    /// Open a .docx file.
    ///
    /// Returns [`Error::SourceNotFound`] if the path does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }

        check_zip_header(path)?;

        let file = File::open(path)?;
        log::debug!("Opening {}", path.display());
        Self::new(BufReader::new(file))
    }
}

impl DocxParser<Cursor<Vec<u8>>> {
    /// Parse a .docx package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !is_zip_bytes(data) {
            return Err(Error::Zip("missing ZIP signature".to_string()));
        }
        Self::new(Cursor::new(data.to_vec()))
    }

    /// Parse a .docx package from a reader.
    pub fn from_reader<T: Read>(mut reader: T) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}

impl<R: Read + Seek> DocxParser<R> {
    /// Open a package from a seekable reader and locate its main document.
    pub fn new(reader: R) -> Result<Self> {
        let mut package = Package::new(reader)?;
        let main_part = package.main_document_part()?;

        let content_types = package.content_types()?;
        let content_type = content_types.content_type(&main_part).unwrap_or_default();
        let format = DocxFormat::from_content_type(content_type)
            .ok_or_else(|| Error::UnsupportedContentType(content_type.to_string()))?;

        log::debug!("Main document part: {} ({})", main_part, format);
        Ok(Self {
            package,
            main_part,
            format,
        })
    }

    /// Get the package format.
    pub fn format(&self) -> DocxFormat {
        self.format
    }

    /// Get the name of the main document part.
    pub fn main_part(&self) -> &str {
        &self.main_part
    }

    /// Load the document's style sheet.
    pub fn styles(&mut self) -> Result<StyleSheet> {
        let styles_part = match self.package.related_part(&self.main_part, REL_STYLES)? {
            Some(part) => Some(part),
            None if self.package.has_part(DEFAULT_STYLES_PART) => {
                Some(DEFAULT_STYLES_PART.to_string())
            }
            None => None,
        };

        match styles_part {
            Some(part) => match self.package.read_optional_part(&part)? {
                Some(xml) => {
                    let sheet = StyleSheet::parse(&xml)?;
                    if sheet.is_empty() {
                        log::warn!("Styles part {} defines no styles", part);
                    }
                    Ok(sheet)
                }
                None => {
                    log::warn!("Styles part {} is referenced but missing", part);
                    Ok(StyleSheet::builtin())
                }
            },
            None => {
                log::warn!("Package has no styles part; using built-in defaults");
                Ok(StyleSheet::builtin())
            }
        }
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&mut self) -> Result<Document> {
        let styles = self.styles()?;
        let xml = self.package.read_part(&self.main_part)?;
        parse_body(&xml, &styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let result = DocxParser::open("does/not/exist.docx");
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_from_bytes_not_zip() {
        let result = DocxParser::from_bytes(b"plain text, not a package");
        assert!(matches!(result, Err(Error::Zip(_))));
    }

    #[test]
    fn test_from_bytes_empty() {
        assert!(DocxParser::from_bytes(&[]).is_err());
    }
}
