//! Small quick-xml helpers shared by the part readers.

use quick_xml::events::BytesStart;

use crate::error::Result;

/// Get the unescaped value of the attribute with the given local name.
///
/// Namespace prefixes are ignored, so `w:val` and `val` both match `b"val"`.
pub(crate) fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Interpret an OOXML on/off attribute value.
pub(crate) fn is_on(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true") | Some("on"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    fn first_start(xml: &str) -> BytesStart<'static> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => return e.into_owned(),
                Event::Eof => panic!("no element"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_attr_value_ignores_prefix() {
        let e = first_start(r#"<w:pStyle w:val="Heading1"/>"#);
        assert_eq!(attr_value(&e, b"val").unwrap().as_deref(), Some("Heading1"));
        assert_eq!(attr_value(&e, b"type").unwrap(), None);
    }

    #[test]
    fn test_attr_value_unescapes() {
        let e = first_start(r#"<w:name w:val="Q&amp;A"/>"#);
        assert_eq!(attr_value(&e, b"val").unwrap().as_deref(), Some("Q&A"));
    }

    #[test]
    fn test_is_on() {
        assert!(is_on(Some("1")));
        assert!(is_on(Some("true")));
        assert!(!is_on(Some("0")));
        assert!(!is_on(None));
    }
}
