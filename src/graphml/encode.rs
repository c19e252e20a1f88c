//! GraphML writer

use super::repair::repair_numeric_references;
use crate::graph::GraphModel;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// Key id of the edge label attribute
pub const TITLE_KEY_ID: &str = "d0";

/// Name of the edge label attribute
pub const TITLE_ATTR: &str = "title";

/// Errors while writing a GraphML document
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize `graph` as a GraphML document.
///
/// One `<node>` per vertex keyed by its id, one `<edge>` per edge with the
/// label stored under the `title` key. The graph is declared undirected.
/// Names are written as UTF-8 text; the result is passed through
/// [`repair_numeric_references`] so no numeric references survive for
/// printable characters.
pub fn encode(graph: &GraphModel) -> Result<String, EncodeError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("graphml").with_attributes([
        ("xmlns", GRAPHML_NS),
        ("xmlns:xsi", XSI_NS),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
    ])))?;
    writer.write_event(Event::Empty(BytesStart::new("key").with_attributes([
        ("id", TITLE_KEY_ID),
        ("for", "edge"),
        ("attr.name", TITLE_ATTR),
        ("attr.type", "long"),
    ])))?;
    writer.write_event(Event::Start(
        BytesStart::new("graph").with_attributes([("edgedefault", "undirected")]),
    ))?;

    for vertex in graph.vertices() {
        writer.write_event(Event::Empty(
            BytesStart::new("node").with_attributes([("id", vertex.as_str())]),
        ))?;
    }

    for edge in graph.edges() {
        writer.write_event(Event::Start(BytesStart::new("edge").with_attributes([
            ("source", edge.source().as_str()),
            ("target", edge.target().as_str()),
        ])))?;
        let label = edge.label().to_string();
        writer
            .create_element("data")
            .with_attribute(("key", TITLE_KEY_ID))
            .write_text_content(BytesText::new(&label))?;
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("graphml")))?;

    let document = String::from_utf8(writer.into_inner().into_inner())?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        bytes = document.len(),
        "encoded GraphML"
    );

    Ok(repair_numeric_references(&document).into_owned())
}
