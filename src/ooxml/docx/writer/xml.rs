//! XML serialization shared by every builder node.
//!
//! Nodes implement [`ToXml`] by emitting events into an [`XmlSink`], a thin
//! layer over `quick_xml::Writer` that declares the WordprocessingML namespace
//! on whichever element is written first. That makes any node a valid
//! standalone fragment as well as a child of a larger part.

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// WordprocessingML main namespace, bound to the `w` prefix.
pub const WML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Options controlling how a node tree is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Indent nested elements on separate lines
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set
    pub indent_size: usize,
    /// Emit an `<?xml ...?>` declaration before the root element
    pub declaration: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent_size: 2,
            declaration: false,
        }
    }
}

impl SerializeOptions {
    /// Single-line output without a declaration.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Set whether a declaration is written.
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

/// Event sink that node serializers write into.
pub struct XmlSink {
    writer: Writer<Vec<u8>>,
    namespace_pending: bool,
}

impl XmlSink {
    pub(crate) fn new(options: &SerializeOptions) -> Self {
        let writer = if options.pretty {
            Writer::new_with_indent(Vec::new(), b' ', options.indent_size)
        } else {
            Writer::new(Vec::new())
        };
        Self {
            writer,
            namespace_pending: true,
        }
    }

    fn element<'a>(&mut self, name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
        let mut elem = BytesStart::new(name);
        if std::mem::take(&mut self.namespace_pending) {
            elem.push_attribute(("xmlns:w", WML_NAMESPACE));
        }
        for &attr in attrs {
            elem.push_attribute(attr);
        }
        elem
    }

    fn write(&mut self, event: Event<'_>, what: &str) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| OoxmlError::Xml(format!("Failed to write {}: {}", what, e)))
    }

    /// Open an element. Attributes are written in slice order.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = self.element(name, attrs);
        self.write(Event::Start(elem), name)
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = self.element(name, attrs);
        self.write(Event::Empty(elem), name)
    }

    /// Close an element opened with [`XmlSink::start`].
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)), name)
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::new(text)), "text")
    }

    pub(crate) fn declaration(&mut self) -> Result<()> {
        self.write(
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
            "XML declaration",
        )
    }

    pub(crate) fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| OoxmlError::Xml(format!("Invalid UTF-8 in generated XML: {}", e)))
    }
}

/// A node that can write itself as WordprocessingML.
pub trait ToXml {
    /// Emit this node (and its subtree) into `sink`.
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()>;
}

/// Serialize `node` to a string according to `options`.
pub fn serialize<T: ToXml + ?Sized>(node: &T, options: &SerializeOptions) -> Result<String> {
    let mut sink = XmlSink::new(options);
    if options.declaration {
        sink.declaration()?;
    }
    node.write_xml(&mut sink)?;
    log::trace!("serialized WordprocessingML node (pretty: {})", options.pretty);
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl ToXml for Sample {
        fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
            sink.start("w:r", &[])?;
            sink.empty("w:b", &[])?;
            sink.start("w:t", &[])?;
            sink.text("a < b & c")?;
            sink.end("w:t")?;
            sink.end("w:r")
        }
    }

    #[test]
    fn test_compact_output_declares_namespace_once() {
        let xml = serialize(&Sample, &SerializeOptions::compact()).unwrap();
        assert_eq!(
            xml,
            format!(
                "<w:r xmlns:w=\"{}\"><w:b/><w:t>a &lt; b &amp; c</w:t></w:r>",
                WML_NAMESPACE
            )
        );
    }

    #[test]
    fn test_pretty_output_indents_children() {
        let xml = serialize(&Sample, &SerializeOptions::default()).unwrap();
        assert!(xml.contains("\n  <w:b/>"));
        assert!(xml.contains("<w:t>a &lt; b &amp; c</w:t>"));
        assert!(!xml.starts_with("<?xml"));
    }

    #[test]
    fn test_declaration() {
        let options = SerializeOptions::compact().with_declaration(true);
        let xml = serialize(&Sample, &options).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert_eq!(xml.matches("xmlns:w=").count(), 1);
    }
}
