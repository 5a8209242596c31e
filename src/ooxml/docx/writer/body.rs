//! Document body: the root that built paragraphs and tables are appended to.
//!
//! This is the hand-off point to whatever assembles the `.docx` package. It
//! writes the main document part (`w:document` / `w:body`) with an XML
//! declaration; zipping and relationships are left to the package layer.

use crate::ooxml::error::Result;

use super::table::BlockContent;
use super::xml::{SerializeOptions, ToXml, XmlSink, serialize};

/// Ordered block content of a document body.
#[derive(Debug, Clone, Default)]
pub struct DocumentBody {
    content: Vec<BlockContent>,
}

impl DocumentBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph or table.
    pub fn add(&mut self, content: impl Into<BlockContent>) -> &mut Self {
        self.content.push(content.into());
        self
    }

    /// Number of root blocks.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Root blocks in document order.
    pub fn content(&self) -> &[BlockContent] {
        &self.content
    }

    /// Main document part XML, indented and with a declaration.
    pub fn to_xml(&self) -> Result<String> {
        serialize(self, &SerializeOptions::default().with_declaration(true))
    }

    pub fn to_xml_with(&self, options: &SerializeOptions) -> Result<String> {
        serialize(self, options)
    }
}

impl ToXml for DocumentBody {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        sink.start("w:document", &[])?;
        sink.start("w:body", &[])?;
        for item in &self.content {
            item.write_xml(sink)?;
        }
        sink.end("w:body")?;
        sink.end("w:document")
    }
}
