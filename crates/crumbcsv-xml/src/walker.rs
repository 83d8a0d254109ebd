// Dweve CrumbCSV - Bread-crumb XML to CSV flattener
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Forward-only XML walk driving a [`CrumbHandler`].
//!
//! The document is read once through a buffered `quick-xml` reader; nothing
//! is materialized beyond the current event and the crumb stack. Names and
//! values are decoded in the encoding the document declares (UTF-8 when it
//! declares none) and passed on as UTF-8. Element and attribute names are
//! reported by local name. Namespace declarations
//! are not attributes. Names must satisfy the XML 1.0 `Name` production.
//! Character data is checked for well-formed references and otherwise
//! skipped. DOCTYPE, comments and processing instructions are skipped, and
//! no DTD is loaded or validated.

use crate::error::{XmlError, XmlResult};
use crate::handler::{CrumbHandler, CrumbTracker, XmlAttribute};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, trace};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Configuration for the streaming walk.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Buffer size for reading input (default: 64KB)
    pub buffer_size: usize,
    /// Maximum element nesting depth (default: 1024)
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            buffer_size: 65536, // 64KB
            max_depth: 1024,
        }
    }
}

/// Counters gathered during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Elements opened, self-closing ones included.
    pub elements: usize,
    /// Deepest nesting reached.
    pub max_depth: usize,
    /// Bytes consumed from the input.
    pub bytes: usize,
}

/// Walk an XML document from any reader, calling `handler` for each element.
///
/// # Errors
///
/// Stops at the first malformed construct, depth-limit violation, read
/// failure or handler error.
///
/// # Examples
///
/// ```
/// use crumbcsv_core::BreadCrumb;
/// use crumbcsv_xml::{walk_xml, CrumbHandler, ParseConfig, XmlAttribute, XmlResult};
///
/// struct Crumbs(Vec<String>);
///
/// impl CrumbHandler for Crumbs {
///     fn start_element(&mut self, crumb: &BreadCrumb, _: &[XmlAttribute]) -> XmlResult<()> {
///         self.0.push(crumb.render());
///         Ok(())
///     }
/// }
///
/// let mut seen = Crumbs(Vec::new());
/// walk_xml("<a><b/><c><d/></c></a>".as_bytes(), &mut seen, &ParseConfig::default()).unwrap();
/// assert_eq!(seen.0, vec!["a", "a.b", "a.c", "a.c.d"]);
/// ```
pub fn walk_xml<R, H>(reader: R, handler: &mut H, config: &ParseConfig) -> XmlResult<WalkStats>
where
    R: Read,
    H: CrumbHandler + ?Sized,
{
    let buffered = BufReader::with_capacity(config.buffer_size.max(1), reader);
    walk_buffered(Reader::from_reader(buffered), handler, config)
}

/// Walk an in-memory XML string.
pub fn walk_str<H>(xml: &str, handler: &mut H, config: &ParseConfig) -> XmlResult<WalkStats>
where
    H: CrumbHandler + ?Sized,
{
    walk_buffered(Reader::from_str(xml), handler, config)
}

fn walk_buffered<B, H>(
    mut reader: Reader<B>,
    handler: &mut H,
    config: &ParseConfig,
) -> XmlResult<WalkStats>
where
    B: BufRead,
    H: CrumbHandler + ?Sized,
{
    let mut tracker = CrumbTracker::new(config.max_depth);
    let mut stats = WalkStats::default();
    let mut attributes = Vec::new();
    let mut buf = Vec::with_capacity(8192);

    loop {
        buf.clear();
        let pos = reader.buffer_position();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| XmlError::from_quick_xml(reader.buffer_position(), e))?;
        let decoder = reader.decoder();

        match event {
            Event::Start(e) => {
                open_element(&e, decoder, pos, &mut tracker, handler, &mut attributes, &mut stats)?;
            }
            Event::Empty(e) => {
                open_element(&e, decoder, pos, &mut tracker, handler, &mut attributes, &mut stats)?;
                let name = decode(decoder, e.local_name().into_inner(), pos)?;
                close_element(&name, pos, &mut tracker, handler)?;
            }
            Event::End(e) => {
                let name = decode(decoder, e.local_name().into_inner(), pos)?;
                close_element(&name, pos, &mut tracker, handler)?;
            }
            Event::Text(e) => {
                if !tracker.at_top_level() {
                    e.unescape().map_err(|err| XmlError::from_quick_xml(pos, err))?;
                } else if !is_blank(&e, !tracker.root_seen()) {
                    return Err(XmlError::parse(pos, "text found outside the root element"));
                }
            }
            Event::CData(_) => {
                if tracker.at_top_level() {
                    return Err(XmlError::parse(pos, "CDATA found outside the root element"));
                }
            }
            Event::Eof => {
                stats.bytes = reader.buffer_position();
                tracker.finish(stats.bytes)?;
                break;
            }
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    debug!(
        elements = stats.elements,
        max_depth = stats.max_depth,
        bytes = stats.bytes,
        "XML walk complete"
    );
    Ok(stats)
}

fn open_element<H>(
    element: &BytesStart<'_>,
    decoder: Decoder,
    pos: usize,
    tracker: &mut CrumbTracker,
    handler: &mut H,
    attributes: &mut Vec<XmlAttribute>,
    stats: &mut WalkStats,
) -> XmlResult<()>
where
    H: CrumbHandler + ?Sized,
{
    check_name(&decode(decoder, element.name().into_inner(), pos)?, pos)?;
    let name = decode(decoder, element.local_name().into_inner(), pos)?;
    tracker.enter(&name, pos)?;
    stats.elements += 1;
    stats.max_depth = stats.max_depth.max(tracker.depth());

    read_attributes(element, decoder, pos, attributes)?;
    trace!(crumb = %tracker.crumb(), attributes = attributes.len(), "start element");
    handler.start_element(tracker.crumb(), attributes)
}

fn close_element<H>(
    name: &str,
    pos: usize,
    tracker: &mut CrumbTracker,
    handler: &mut H,
) -> XmlResult<()>
where
    H: CrumbHandler + ?Sized,
{
    if tracker.crumb().last() == Some(name) {
        handler.end_element(tracker.crumb())?;
    }
    tracker.leave(name, pos)
}

/// Collect an element's attributes into `out`, replacing its contents.
fn read_attributes(
    element: &BytesStart<'_>,
    decoder: Decoder,
    pos: usize,
    out: &mut Vec<XmlAttribute>,
) -> XmlResult<()> {
    out.clear();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| XmlError::parse(pos, e.to_string()))?;
        check_name(&decode(decoder, attr.key.into_inner(), pos)?, pos)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        let name = decode(decoder, attr.key.local_name().into_inner(), pos)?;
        let raw = decode(decoder, &attr.value, pos)?;
        if raw.contains('<') {
            return Err(XmlError::parse(
                pos,
                format!("attribute '{}': '<' is not allowed in a value", name),
            ));
        }
        let normalized = normalize_attribute_whitespace(&raw);
        let value = quick_xml::escape::unescape(&normalized)
            .map_err(|e| XmlError::parse(pos, format!("attribute '{}': {}", name, e)))?
            .into_owned();

        match out.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => out.push(XmlAttribute { name, value }),
        }
    }
    Ok(())
}

/// Reject element and attribute names that break the XML 1.0 `Name` production.
fn check_name(name: &str, pos: usize) -> XmlResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(XmlError::parse(pos, format!("invalid name '{}'", name)))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

fn decode(decoder: Decoder, bytes: &[u8], pos: usize) -> XmlResult<String> {
    decoder
        .decode(bytes)
        .map(Cow::into_owned)
        .map_err(|e| XmlError::Utf8 {
            pos,
            message: e.to_string(),
        })
}

/// Literal tab, CR and LF in an attribute value read as a single space each,
/// with CRLF counted once. Character references such as `&#10;` are
/// untouched here and survive unescaping.
fn normalize_attribute_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\r', '\n']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\t' | '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn is_blank(text: &[u8], allow_bom: bool) -> bool {
    let text = match text.strip_prefix(UTF8_BOM) {
        Some(rest) if allow_bom => rest,
        _ => text,
    };
    text.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbcsv_core::BreadCrumb;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl CrumbHandler for Recorder {
        fn start_element(
            &mut self,
            crumb: &BreadCrumb,
            attributes: &[XmlAttribute],
        ) -> XmlResult<()> {
            let attrs: Vec<String> = attributes
                .iter()
                .map(|a| format!("{}={}", a.name, a.value))
                .collect();
            self.events
                .push(format!("start {} [{}]", crumb, attrs.join(",")));
            Ok(())
        }

        fn end_element(&mut self, crumb: &BreadCrumb) -> XmlResult<()> {
            self.events.push(format!("end {}", crumb));
            Ok(())
        }
    }

    fn walk(xml: &str) -> XmlResult<Vec<String>> {
        let mut recorder = Recorder::default();
        walk_str(xml, &mut recorder, &ParseConfig::default())?;
        Ok(recorder.events)
    }

    #[test]
    fn test_parse_config_default() {
        let config = ParseConfig::default();
        assert_eq!(config.buffer_size, 65536);
        assert_eq!(config.max_depth, 1024);
    }

    #[test]
    fn test_start_end_order() {
        let events = walk(r#"<a><b x="1"/><c></c></a>"#).unwrap();
        assert_eq!(
            events,
            vec![
                "start a []",
                "start a.b [x=1]",
                "end a.b",
                "start a.c []",
                "end a.c",
                "end a",
            ]
        );
    }

    #[test]
    fn test_local_names_only() {
        let events = walk(
            r#"<ns:a xmlns:ns="urn:x" xmlns="urn:d"><ns:b ns:id="7" plain="p"/></ns:a>"#,
        )
        .unwrap();
        assert_eq!(events[0], "start a []");
        assert_eq!(events[1], "start a.b [id=7,plain=p]");
    }

    #[test]
    fn test_attribute_unescape() {
        let events = walk(r#"<a v="x &amp; &quot;y&quot; &lt;z&gt; &#65;"/>"#).unwrap();
        assert_eq!(events[0], r#"start a [v=x & "y" <z> A]"#);
    }

    #[test]
    fn test_attribute_whitespace_normalized() {
        let events = walk("<a v=\"one\ttwo\r\nthree\nfour\" k=\"keep&#10;me\"/>").unwrap();
        assert_eq!(events[0], "start a [v=one two three four,k=keep\nme]");
    }

    #[test]
    fn test_skips_decl_comments_doctype() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE a SYSTEM "a.dtd">
<!-- note -->
<a><?pi data?><b/>text<![CDATA[raw]]></a>
"#;
        let events = walk(xml).unwrap();
        assert_eq!(events, vec!["start a []", "start a.b []", "end a.b", "end a"]);
    }

    #[test]
    fn test_mismatched_end_tag() {
        assert!(matches!(walk("<a><b></c></a>"), Err(XmlError::Parse { .. })));
    }

    #[test]
    fn test_unclosed_element() {
        let err = walk("<a><b>").unwrap_err();
        assert!(matches!(err, XmlError::Parse { .. }));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(
            walk(""),
            Err(XmlError::parse(0, "document has no root element"))
        );
        assert!(walk("<?xml version=\"1.0\"?>\n").is_err());
    }

    #[test]
    fn test_second_root() {
        assert!(walk("<a/><b/>").is_err());
    }

    #[test]
    fn test_text_outside_root() {
        assert!(walk("junk<a/>").is_err());
        assert!(walk("<a/>junk").is_err());
        assert!(walk("  \n<a/>\n  ").is_ok());
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        assert!(matches!(walk(r#"<a x="1" x="2"/>"#), Err(XmlError::Parse { .. })));
    }

    #[test]
    fn test_raw_lt_in_attribute_rejected() {
        let err = walk(r#"<a x="<"/>"#).unwrap_err();
        assert!(matches!(err, XmlError::Parse { .. }));
        assert!(err.to_string().contains("'x'"));
        assert!(walk(r#"<a x="&lt;"/>"#).is_ok());
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert_eq!(walk("<1a/>"), Err(XmlError::parse(0, "invalid name '1a'")));
        assert!(matches!(walk("<a><-b/></a>"), Err(XmlError::Parse { .. })));
        assert!(matches!(walk(r#"<a 9x="1"/>"#), Err(XmlError::Parse { .. })));
    }

    #[test]
    fn test_valid_names_accepted() {
        let events = walk(r#"<ns:a-b.c_1 xmlns:ns="urn:x" é="1"><_x·y/></ns:a-b.c_1>"#).unwrap();
        assert_eq!(events[0], "start a-b.c_1 [é=1]");
        assert_eq!(events[1], "start a-b.c_1._x·y []");
    }

    #[test]
    fn test_unknown_entity_in_text_rejected() {
        assert!(matches!(walk("<a>&foo;</a>"), Err(XmlError::Parse { .. })));
        assert!(matches!(walk("<a><b/>x &amp y</a>"), Err(XmlError::Parse { .. })));
        assert!(walk("<a>R&amp;D &#65; &lt;ok&gt;</a>").is_ok());
    }

    #[test]
    fn test_check_name() {
        assert!(check_name("sailpoint", 0).is_ok());
        assert!(check_name("x:y", 0).is_ok());
        assert!(check_name("", 0).is_err());
        assert!(check_name(".a", 0).is_err());
        assert!(check_name("a b", 0).is_err());
    }

    #[test]
    fn test_same_local_name_last_wins() {
        let events = walk(r#"<a xmlns:p="urn:p" xmlns:q="urn:q" p:x="1" q:x="2"/>"#).unwrap();
        assert_eq!(events[0], "start a [x=2]");
    }

    #[test]
    fn test_depth_limit() {
        let mut recorder = Recorder::default();
        let config = ParseConfig {
            max_depth: 2,
            ..Default::default()
        };
        let err = walk_str("<a><b><c/></b></a>", &mut recorder, &config).unwrap_err();
        assert_eq!(err, XmlError::DepthLimitExceeded { max: 2, current: 3 });
    }

    #[test]
    fn test_stats() {
        let mut recorder = Recorder::default();
        let xml = "<a><b/><b><c/></b></a>";
        let stats = walk_str(xml, &mut recorder, &ParseConfig::default()).unwrap();
        assert_eq!(stats.elements, 4);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.bytes, xml.len());
    }

    #[test]
    fn test_walk_xml_small_buffer() {
        let mut recorder = Recorder::default();
        let config = ParseConfig {
            buffer_size: 4,
            ..Default::default()
        };
        walk_xml(r#"<root><item id="1"/></root>"#.as_bytes(), &mut recorder, &config).unwrap();
        assert_eq!(recorder.events[1], "start root.item [id=1]");
    }

    #[test]
    fn test_handler_error_stops_walk() {
        struct Failing;
        impl CrumbHandler for Failing {
            fn start_element(&mut self, crumb: &BreadCrumb, _: &[XmlAttribute]) -> XmlResult<()> {
                if crumb.depth() == 2 {
                    return Err(XmlError::handler(crumb.render(), "stop"));
                }
                Ok(())
            }
        }
        let err = walk_str("<a><b/></a>", &mut Failing, &ParseConfig::default()).unwrap_err();
        assert_eq!(err, XmlError::handler("a.b", "stop"));
    }

    #[test]
    fn test_normalize_attribute_whitespace() {
        assert_eq!(normalize_attribute_whitespace("plain"), "plain");
        assert_eq!(normalize_attribute_whitespace("a\r\nb\rc"), "a b c");
    }

    #[test]
    fn test_is_blank_bom() {
        assert!(is_blank(b"\xEF\xBB\xBF\n", true));
        assert!(!is_blank(b"\xEF\xBB\xBF\n", false));
    }
}
