//! # SVG Serializer
//!
//! Emits the composed document as a standalone SVG string: XML
//! declaration, UTF-8, no synthetic namespace prefixes.
//!
//! The document is always rendered fully in memory before any file is
//! touched, so a failed composition never leaves a partial output behind.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;

use super::{Element, Node};
use crate::error::EscudoError;

/// Serialize a document to a standalone SVG string.
pub fn document_to_string(root: &Element) -> Result<String, EscudoError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let markup = String::from_utf8(writer.into_inner())
        .expect("serialized markup is valid UTF-8");
    Ok(strip_namespace_prefixes(&markup))
}

/// Serialize and write in one step. The file is only created once the
/// whole document has been rendered successfully.
pub fn write_document(path: &Path, root: &Element) -> Result<(), EscudoError> {
    let markup = document_to_string(root)?;
    std::fs::write(path, markup)?;
    Ok(())
}

/// Remove synthetic `ns0:`-style prefix tokens from serialized markup.
///
/// The writer above registers no prefixes, so normally this is a no-op;
/// it is kept as a final canonicalization pass so re-embedded fragment
/// markup always matches hand-authored SVG conventions.
pub fn strip_namespace_prefixes(markup: &str) -> String {
    markup.replace("ns0:", "").replace(":ns0", "")
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), EscudoError> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attrs() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
