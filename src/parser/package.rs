//! OPC package access: ZIP parts, relationships and content types.

use std::collections::HashMap;
use std::io::{Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::xml::attr_value;
use crate::error::{Error, Result};

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// Largest part the reader accepts, declared or decompressed.
const MAX_PART_SIZE: u64 = 256 * 1024 * 1024;
/// Upper bound on the buffer reserved up front from a declared size.
const PREALLOC_LIMIT: u64 = 1024 * 1024;

/// Relationship type suffix of the main document part.
const REL_OFFICE_DOCUMENT: &str = "/officeDocument";

/// A single entry of a relationships part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target as written in the relationships part
    pub target: String,
    /// Whether the target lives outside the package
    pub external: bool,
}

impl Relationship {
    /// Check the relationship type against a suffix such as "/styles".
    ///
    /// Transitional and strict OOXML use different URI prefixes for the
    /// same relationship, so only the last path segment is compared.
    pub fn is_type(&self, suffix: &str) -> bool {
        self.rel_type.ends_with(suffix)
    }
}

/// Parsed `[Content_Types].xml`.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Parse a content types part.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut types = ContentTypes::default();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"Default" => {
                        if let (Some(ext), Some(ct)) =
                            (attr_value(e, b"Extension")?, attr_value(e, b"ContentType")?)
                        {
                            types.defaults.insert(ext.to_lowercase(), ct);
                        }
                    }
                    b"Override" => {
                        if let (Some(name), Some(ct)) =
                            (attr_value(e, b"PartName")?, attr_value(e, b"ContentType")?)
                        {
                            types.overrides.insert(normalize_part_name(&name), ct);
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(types)
    }

    /// Get the content type of a part; overrides take precedence over
    /// extension defaults.
    pub fn content_type(&self, part_name: &str) -> Option<&str> {
        let key = normalize_part_name(part_name);
        if let Some(ct) = self.overrides.get(&key) {
            return Some(ct);
        }
        let ext = key.rsplit_once('.').map(|(_, ext)| ext)?;
        self.defaults.get(ext).map(String::as_str)
    }
}

/// Part names compare case-insensitively and without the leading slash.
fn normalize_part_name(name: &str) -> String {
    name.trim_start_matches('/').to_lowercase()
}

/// Read-only view of an OPC (ZIP) package.
pub struct Package<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> Package<R> {
    /// Open a package from a seekable reader.
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        log::debug!("Opened package with {} entries", archive.len());
        Ok(Self { archive })
    }

    /// Check if a part exists.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// Read a part's bytes.
    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self.archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingPart(name.to_string()),
            other => Error::from(other),
        })?;
        let declared = entry.size();
        if declared > MAX_PART_SIZE {
            return Err(Error::Zip(format!(
                "part {} declares {} bytes, limit is {}",
                name, declared, MAX_PART_SIZE
            )));
        }

        let mut data = Vec::with_capacity(declared.min(PREALLOC_LIMIT) as usize);
        entry.by_ref().take(MAX_PART_SIZE + 1).read_to_end(&mut data)?;
        if data.len() as u64 > MAX_PART_SIZE {
            return Err(Error::Zip(format!(
                "part {} exceeds {} bytes when decompressed",
                name, MAX_PART_SIZE
            )));
        }
        Ok(data)
    }

    /// Read a part's bytes, or `None` if the package does not contain it.
    pub fn read_optional_part(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        if !self.has_part(name) {
            return Ok(None);
        }
        self.read_part(name).map(Some)
    }

    /// Read the content types part.
    pub fn content_types(&mut self) -> Result<ContentTypes> {
        let xml = self.read_part(CONTENT_TYPES_PART)?;
        ContentTypes::parse(&xml)
    }

    /// Read the relationships of a part, or of the package itself when
    /// `source_part` is empty. A missing relationships part means no
    /// relationships.
    pub fn relationships(&mut self, source_part: &str) -> Result<Vec<Relationship>> {
        let rels_part = rels_part_name(source_part);
        match self.read_optional_part(&rels_part)? {
            Some(xml) => parse_relationships(&xml),
            None => Ok(Vec::new()),
        }
    }

    /// Resolve the target part of the first internal relationship of the
    /// given type.
    pub fn related_part(&mut self, source_part: &str, rel_suffix: &str) -> Result<Option<String>> {
        let rels = self.relationships(source_part)?;
        Ok(rels
            .iter()
            .find(|r| !r.external && r.is_type(rel_suffix))
            .map(|r| resolve_target(source_part, &r.target)))
    }

    /// Locate the main document part through the package relationships.
    pub fn main_document_part(&mut self) -> Result<String> {
        if !self.has_part(PACKAGE_RELS_PART) {
            log::warn!(
                "Package has no {}; assuming {}",
                PACKAGE_RELS_PART,
                DEFAULT_MAIN_PART
            );
            return Ok(DEFAULT_MAIN_PART.to_string());
        }

        self.related_part("", REL_OFFICE_DOCUMENT)?
            .ok_or_else(|| Error::MissingPart("main document part".to_string()))
    }
}

/// Parse a relationships part.
pub fn parse_relationships(xml: &[u8]) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut rels = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let target = attr_value(e, b"Target")?.unwrap_or_default();
                rels.push(Relationship {
                    id: attr_value(e, b"Id")?.unwrap_or_default(),
                    rel_type: attr_value(e, b"Type")?.unwrap_or_default(),
                    external: attr_value(e, b"TargetMode")?.as_deref() == Some("External"),
                    target,
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rels)
}

/// Name of the relationships part for a source part.
///
/// `word/document.xml` -> `word/_rels/document.xml.rels`, `""` -> `_rels/.rels`.
fn rels_part_name(source_part: &str) -> String {
    match source_part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None if source_part.is_empty() => PACKAGE_RELS_PART.to_string(),
        None => format!("_rels/{}.rels", source_part),
    }
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(source_part: &str, target: &str) -> String {
    let mut segments: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        match source_part.rsplit_once('/') {
            Some((dir, _)) => dir.split('/').collect(),
            None => Vec::new(),
        }
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    segments.join("/")
}
