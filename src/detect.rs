//! Word package detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of WordprocessingML package, derived from the main part's content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocxFormat {
    /// Regular document (.docx)
    Document,
    /// Macro-enabled document (.docm)
    MacroEnabled,
    /// Template (.dotx)
    Template,
    /// Macro-enabled template (.dotm)
    MacroEnabledTemplate,
}

const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_DOCUMENT_MACRO: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";
const CT_TEMPLATE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
const CT_TEMPLATE_MACRO: &str = "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

impl DocxFormat {
    /// Classify a main-part content type.
    ///
    /// Returns `None` for anything that is not a Word main document.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim() {
            CT_DOCUMENT => Some(DocxFormat::Document),
            CT_DOCUMENT_MACRO => Some(DocxFormat::MacroEnabled),
            CT_TEMPLATE => Some(DocxFormat::Template),
            CT_TEMPLATE_MACRO => Some(DocxFormat::MacroEnabledTemplate),
            _ => None,
        }
    }

    /// Conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocxFormat::Document => "docx",
            DocxFormat::MacroEnabled => "docm",
            DocxFormat::Template => "dotx",
            DocxFormat::MacroEnabledTemplate => "dotm",
        }
    }
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// ZIP local file header signature: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// Signature of an empty ZIP archive (end of central directory only)
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";

/// Check if bytes start with a ZIP signature.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC) || data.starts_with(ZIP_EMPTY_MAGIC)
}

/// Check that a file starts with a ZIP signature.
///
/// # Returns
/// * `Ok(())` if the header looks like a ZIP archive
/// * `Err(Error::Zip)` if it does not
pub fn check_zip_header<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 4];
    let read = file.read(&mut header)?;
    if !is_zip_bytes(&header[..read]) {
        return Err(Error::Zip("missing ZIP signature".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_type() {
        assert_eq!(
            DocxFormat::from_content_type(CT_DOCUMENT),
            Some(DocxFormat::Document)
        );
        assert_eq!(
            DocxFormat::from_content_type(CT_TEMPLATE_MACRO),
            Some(DocxFormat::MacroEnabledTemplate)
        );
        assert_eq!(
            DocxFormat::from_content_type(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"
            ),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DocxFormat::Document.to_string(), ".docx");
        assert_eq!(DocxFormat::MacroEnabled.to_string(), ".docm");
    }

    #[test]
    fn test_is_zip_bytes() {
        assert!(is_zip_bytes(b"PK\x03\x04rest"));
        assert!(is_zip_bytes(b"PK\x05\x06"));
        assert!(!is_zip_bytes(b"%PDF-1.7"));
        assert!(!is_zip_bytes(b""));
    }

    #[test]
    fn test_check_zip_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.docx");
        std::fs::write(&path, "just text").unwrap();
        assert!(matches!(check_zip_header(&path), Err(Error::Zip(_))));
    }
}
