/// Run types and implementation for DOCX documents.
use crate::ooxml::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

use super::factory::OnOff;
use super::xml::XmlSink;

/// Character formatting shared by the runs of one paragraph.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunProperties {
    /// Font family, written for the ascii, high-ANSI and complex-script slots
    pub(crate) font_name: Option<String>,
    /// Font size in half-points
    pub(crate) font_size: Option<u32>,
    pub(crate) bold: Option<&'static OnOff>,
    pub(crate) italic: Option<&'static OnOff>,
    /// Text color, stored verbatim (usually `RRGGBB`)
    pub(crate) color: Option<String>,
}

/// Run formatting handle; every clone refers to the same properties.
pub type SharedRunProperties = Rc<RefCell<RunProperties>>;

impl RunProperties {
    /// Font family name.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Font size in half-points.
    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    /// Bold flag, if set.
    pub fn bold(&self) -> Option<&'static OnOff> {
        self.bold
    }

    /// Italic flag, if set.
    pub fn italic(&self) -> Option<&'static OnOff> {
        self.italic
    }

    /// Text color as given (`RRGGBB`).
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub(crate) fn has_properties(&self) -> bool {
        self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold.is_some()
            || self.italic.is_some()
            || self.color.is_some()
    }

    pub(crate) fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }

        sink.start("w:rPr", &[])?;

        if let Some(ref font_name) = self.font_name {
            sink.empty(
                "w:rFonts",
                &[
                    ("w:ascii", font_name.as_str()),
                    ("w:hAnsi", font_name.as_str()),
                    ("w:cs", font_name.as_str()),
                ],
            )?;
        }

        if let Some(bold) = self.bold {
            bold.write_xml(sink, "w:b")?;
        }

        if let Some(italic) = self.italic {
            italic.write_xml(sink, "w:i")?;
        }

        if let Some(ref color) = self.color {
            sink.empty("w:color", &[("w:val", color.as_str())])?;
        }

        if let Some(size) = self.font_size {
            let mut buf = itoa::Buffer::new();
            let size = buf.format(size);
            sink.empty("w:sz", &[("w:val", size)])?;
            sink.empty("w:szCs", &[("w:val", size)])?;
        }

        sink.end("w:rPr")
    }
}

/// Run content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// Line break
    Break,
}

/// A run: one piece of content plus (optionally shared) formatting.
#[derive(Debug, Clone)]
pub struct Run {
    pub(crate) content: RunContent,
    pub(crate) properties: Option<SharedRunProperties>,
}

impl Run {
    pub(crate) fn text(text: &str, properties: SharedRunProperties) -> Self {
        Self {
            content: RunContent::Text(text.to_string()),
            properties: Some(properties),
        }
    }

    pub(crate) fn line_break() -> Self {
        Self {
            content: RunContent::Break,
            properties: None,
        }
    }

    /// Run content.
    pub fn content(&self) -> &RunContent {
        &self.content
    }

    /// Formatting handle, absent for line-break runs.
    pub fn properties(&self) -> Option<&SharedRunProperties> {
        self.properties.as_ref()
    }

    /// Text of a text run.
    pub fn get_text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(s) => Some(s.as_str()),
            RunContent::Break => None,
        }
    }

    pub(crate) fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        sink.start("w:r", &[])?;

        if let Some(ref properties) = self.properties {
            properties.borrow().write_xml(sink)?;
        }

        match &self.content {
            RunContent::Text(text) => {
                if needs_space_preserve(text) {
                    sink.start("w:t", &[("xml:space", "preserve")])?;
                } else {
                    sink.start("w:t", &[])?;
                }
                sink.text(text)?;
                sink.end("w:t")?;
            },
            RunContent::Break => sink.empty("w:br", &[])?,
        }

        sink.end("w:r")
    }
}

/// Leading or trailing whitespace is dropped by consumers unless preserved.
fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
}
