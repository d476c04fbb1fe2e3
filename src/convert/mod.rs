//! File-to-file conversion.
//!
//! [`convert`] is the core operation: parse a `.docx` source, render it to
//! Markdown and write the result to the destination in one call. Nothing
//! is printed; the caller decides how to report the returned outcome.
//!
//! # Example
//!
//! ```no_run
//! use docmark::convert::convert;
//!
//! match convert("Assets/website.docx", "Assets/website.md") {
//!     Ok(report) => println!("wrote {} bytes", report.bytes_written),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::DocxParser;
use crate::render::{to_markdown_with_stats, RenderOptions, RenderStats};

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Source document path
    pub source: PathBuf,

    /// Destination Markdown path
    pub destination: PathBuf,

    /// Number of bytes written to the destination
    pub bytes_written: usize,

    /// Rendering statistics
    pub stats: RenderStats,
}

/// Converts `.docx` files to Markdown files.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    render_options: RenderOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Get the rendering options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Convert `source` to Markdown and write it to `dest`.
    ///
    /// The source is fully parsed and rendered before the destination is
    /// touched, so a parse failure never leaves a destination behind.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        dest: Q,
    ) -> Result<ConvertReport> {
        let source = source.as_ref();
        let dest = dest.as_ref();

        let mut parser = DocxParser::open(source)?;
        let document = parser.parse()?;
        let rendered = to_markdown_with_stats(&document, &self.render_options)?;

        fs::write(dest, &rendered.content).map_err(|e| Error::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;

        log::info!(
            "Converted {} -> {} ({} bytes, {} lines)",
            source.display(),
            dest.display(),
            rendered.content_len(),
            rendered.stats.line_count
        );

        Ok(ConvertReport {
            source: source.to_path_buf(),
            destination: dest.to_path_buf(),
            bytes_written: rendered.content_len(),
            stats: rendered.stats,
        })
    }
}

/// Convert `source` to Markdown at `dest` with default options.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<ConvertReport> {
    Converter::new().convert(source, dest)
}

/// Default destination for a source: same path with a `.md` extension.
pub fn default_destination<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension("md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_convert_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.docx");
        let dest = dir.path().join("missing.md");

        let err = convert(&source, &dest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
        assert!(err.to_string().contains("not found"));
        assert!(!dest.exists());
    }

    #[test]
    fn test_convert_invalid_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.docx");
        let dest = dir.path().join("broken.md");
        fs::write(&source, "not a zip").unwrap();

        let err = convert(&source, &dest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(!dest.exists());
    }

    #[test]
    fn test_default_destination() {
        assert_eq!(
            default_destination("Assets/website.docx"),
            PathBuf::from("Assets/website.md")
        );
        assert_eq!(default_destination("notes"), PathBuf::from("notes.md"));
    }

    #[test]
    fn test_converter_options() {
        let converter = Converter::new().with_render_options(RenderOptions::new().with_rules(vec![]));
        assert!(converter.render_options().rules.is_empty());
    }
}
