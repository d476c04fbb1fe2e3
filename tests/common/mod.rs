//! Builders for in-memory .docx fixtures.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const DOCX_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/></w:style>
<w:style w:type="paragraph" w:styleId="ListNumber"><w:name w:val="List Number"/></w:style>
<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/></w:style>
</w:styles>"#;

/// Assembles the body of a WordprocessingML document.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    with_styles: bool,
    with_package_rels: bool,
    content_type: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            with_styles: true,
            with_package_rels: true,
            content_type: None,
        }
    }

    /// Add a paragraph; `style_id` is the `w:pStyle` value.
    pub fn paragraph(mut self, style_id: Option<&str>, text: &str) -> Self {
        self.body.push_str("<w:p>");
        if let Some(id) = style_id {
            self.body
                .push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id));
        }
        if !text.is_empty() {
            self.body.push_str(&format!(
                r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
                escape(text)
            ));
        }
        self.body.push_str("</w:p>");
        self
    }

    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        self.body.push_str("<w:tbl><w:tblPr/>");
        for row in rows {
            self.body.push_str("<w:tr>");
            for cell in row.iter() {
                self.body.push_str(&format!(
                    r#"<w:tc><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                    escape(cell)
                ));
            }
            self.body.push_str("</w:tr>");
        }
        self.body.push_str("</w:tbl>");
        self
    }

    /// Append raw body XML.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    pub fn without_styles(mut self) -> Self {
        self.with_styles = false;
        self
    }

    pub fn without_package_rels(mut self) -> Self {
        self.with_package_rels = false;
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            self.body
        )
    }

    pub fn build(&self) -> Vec<u8> {
        let content_type = self.content_type.as_deref().unwrap_or(DOCX_MAIN);
        let mut parts: Vec<(&str, String)> = vec![(
            "[Content_Types].xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="{}"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#,
                content_type
            ),
        )];

        if self.with_package_rels {
            parts.push((
                "_rels/.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#
                    .to_string(),
            ));
        }

        parts.push(("word/document.xml", self.document_xml()));

        if self.with_styles {
            parts.push((
                "word/_rels/document.xml.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
                    .to_string(),
            ));
            parts.push(("word/styles.xml", STYLES.to_string()));
        }

        zip_parts(&parts)
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

pub fn zip_parts(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Rewrite the uncompressed size recorded for `name` in the central
/// directory. Sizes that do not fit in 32 bits go into a ZIP64 extra field.
pub fn declare_entry_size(data: &[u8], name: &str, size: u64) -> Vec<u8> {
    let eocd = data
        .windows(4)
        .rposition(|w| w == b"PK\x05\x06")
        .expect("end of central directory");
    let cd_size = u32_at(data, eocd + 12) as usize;
    let mut pos = u32_at(data, eocd + 16) as usize;
    let cd_end = pos + cd_size;

    while pos < cd_end {
        assert_eq!(&data[pos..pos + 4], b"PK\x01\x02");
        let name_len = u16_at(data, pos + 28) as usize;
        let extra_len = u16_at(data, pos + 30) as usize;
        let comment_len = u16_at(data, pos + 32) as usize;

        if &data[pos + 46..pos + 46 + name_len] == name.as_bytes() {
            let mut out = data.to_vec();
            if size < u64::from(u32::MAX) {
                out[pos + 24..pos + 28].copy_from_slice(&(size as u32).to_le_bytes());
                return out;
            }

            out[pos + 24..pos + 28].copy_from_slice(&u32::MAX.to_le_bytes());
            out[pos + 30..pos + 32].copy_from_slice(&((extra_len + 12) as u16).to_le_bytes());

            // ZIP64 extended information: header id 1, 8 data bytes
            let mut zip64 = vec![0x01, 0x00, 0x08, 0x00];
            zip64.extend_from_slice(&size.to_le_bytes());

            let insert_at = pos + 46 + name_len + extra_len;
            let mut patched = out[..insert_at].to_vec();
            patched.extend_from_slice(&zip64);
            patched.extend_from_slice(&out[insert_at..]);

            let eocd = eocd + zip64.len();
            patched[eocd + 12..eocd + 16]
                .copy_from_slice(&((cd_size + zip64.len()) as u32).to_le_bytes());
            return patched;
        }

        pos += 46 + name_len + extra_len + comment_len;
    }

    panic!("no central directory entry for {}", name);
}

fn u16_at(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn u32_at(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
