//! Error types for docmark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document does not exist.
    #[error("File '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    /// I/O error when reading the source document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a readable ZIP package.
    #[error("Package is not a valid ZIP archive: {0}")]
    Zip(String),

    /// Error parsing the XML of a package part.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required package part is missing.
    #[error("Package part not found: {0}")]
    MissingPart(String),

    /// The main document part is not a WordprocessingML document.
    #[error("File is not a Word file, content type is '{0}'")]
    UnsupportedContentType(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Writing the destination file failed.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source path does not exist.
    SourceNotFound,
    /// The source could not be opened or parsed.
    Parse,
    /// The destination could not be written.
    Write,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SourceNotFound(_) => ErrorKind::SourceNotFound,
            Error::Write { .. } => ErrorKind::Write,
            _ => ErrorKind::Parse,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}
