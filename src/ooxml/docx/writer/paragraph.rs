/// Paragraph builder for DOCX documents.
use crate::ooxml::error::{OoxmlError, Result, ensure_arg, ensure_xml_text};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

// Import shared format types
pub use super::super::format::Alignment;
use super::factory::BOOLEAN_TRUE;
use super::run::{Run, RunProperties, SharedRunProperties};
use super::xml::{SerializeOptions, ToXml, XmlSink, serialize};

/// One entry of the slice passed to [`Paragraph::text`].
///
/// Absent entries (`None`) produce no run.
pub trait TextPart {
    fn as_text(&self) -> Option<&str>;
}

impl TextPart for &str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl TextPart for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextPart for Option<&str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

impl TextPart for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

fn check_font_name(name: &str) -> Result<()> {
    ensure_arg(!name.is_empty(), "Font name not valid")?;
    ensure_xml_text(name, "Font name not valid")
}

fn half_points(points: u32) -> Result<u32> {
    ensure_arg(points > 0, "Font size not valid")?;
    points
        .checked_mul(2)
        .ok_or_else(|| OoxmlError::invalid_argument("Font size not valid"))
}

/// Paragraph fields.
#[derive(Debug, Default)]
pub(crate) struct ParagraphData {
    pub(crate) alignment: Option<Alignment>,
    /// Created by the first text or formatting call, then shared by every run
    pub(crate) run_properties: Option<SharedRunProperties>,
    pub(crate) runs: Vec<Run>,
}

impl ParagraphData {
    fn run_properties(&mut self) -> SharedRunProperties {
        self.run_properties
            .get_or_insert_with(|| {
                log::trace!("creating shared run properties");
                Rc::new(RefCell::new(RunProperties::default()))
            })
            .clone()
    }
}

/// A paragraph (`w:p`) under construction.
///
/// `Paragraph` is a handle: clones refer to the same paragraph, and every
/// mutator returns another handle to it so calls can be chained. A paragraph
/// added to a cell or body keeps accepting changes, which show up wherever it
/// was added.
///
/// All text runs of a paragraph share one formatting object, so a formatting
/// call applies to runs added before it as well as after it.
///
/// # Examples
///
/// ```
/// use docx_fluent::{Alignment, Paragraph};
///
/// # fn main() -> docx_fluent::Result<()> {
/// let para = Paragraph::create()
///     .text(&["Hello, world"])?
///     .font("Tahoma", 12)?
///     .bold()
///     .align(Alignment::Center);
/// assert!(para.serialize()?.contains("<w:t>Hello, world</w:t>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    inner: Rc<RefCell<ParagraphData>>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn create() -> Self {
        Self::default()
    }

    /// Whether both handles refer to the same paragraph.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append each present string as a run, with a line break after every
    /// slice position except the last.
    ///
    /// Breaks follow slice positions rather than emitted runs: an absent
    /// entry emits nothing, yet the present entry before it is still
    /// followed by a break unless it sits in the last position.
    pub fn text<T: TextPart>(&self, texts: &[T]) -> Result<Self> {
        ensure_arg(!texts.is_empty(), "String array not valid")?;
        for text in texts.iter().filter_map(|part| part.as_text()) {
            ensure_xml_text(text, "String array not valid")?;
        }

        let mut data = self.inner.borrow_mut();
        let len = texts.len();
        for (i, part) in texts.iter().enumerate() {
            if let Some(text) = part.as_text() {
                let properties = data.run_properties();
                data.runs.push(Run::text(text, properties));
                if i + 1 != len {
                    data.runs.push(Run::line_break());
                }
            }
        }
        Ok(self.clone())
    }

    /// Set font name and size (in points).
    ///
    /// Both values are checked before either is stored.
    pub fn font(&self, name: &str, points: u32) -> Result<Self> {
        check_font_name(name)?;
        let half_points = half_points(points)?;
        self.update_run_properties(|props| {
            props.font_name = Some(name.to_string());
            props.font_size = Some(half_points);
        });
        Ok(self.clone())
    }

    /// Set the font family for ascii, high-ANSI and complex-script text.
    pub fn font_name(&self, name: &str) -> Result<Self> {
        check_font_name(name)?;
        self.update_run_properties(|props| props.font_name = Some(name.to_string()));
        Ok(self.clone())
    }

    /// Set the font size in points; stored in half-points.
    pub fn font_size(&self, points: u32) -> Result<Self> {
        let half_points = half_points(points)?;
        self.update_run_properties(|props| props.font_size = Some(half_points));
        Ok(self.clone())
    }

    /// Enable bold.
    pub fn bold(&self) -> Self {
        self.update_run_properties(|props| props.bold = Some(&BOOLEAN_TRUE));
        self.clone()
    }

    /// Enable italic.
    pub fn italic(&self) -> Self {
        self.update_run_properties(|props| props.italic = Some(&BOOLEAN_TRUE));
        self.clone()
    }

    /// Set the text color (`RRGGBB`, kept as given).
    pub fn color(&self, color: &str) -> Result<Self> {
        ensure_arg(!color.is_empty(), "String color not valid")?;
        ensure_xml_text(color, "String color not valid")?;
        self.update_run_properties(|props| props.color = Some(color.to_string()));
        Ok(self.clone())
    }

    /// Set paragraph alignment.
    pub fn align(&self, alignment: Alignment) -> Self {
        self.inner.borrow_mut().alignment = Some(alignment);
        self.clone()
    }

    /// Paragraph alignment, if set.
    pub fn alignment(&self) -> Option<Alignment> {
        self.inner.borrow().alignment
    }

    /// Shared run formatting, if created yet.
    pub fn run_properties(&self) -> Option<SharedRunProperties> {
        self.inner.borrow().run_properties.clone()
    }

    /// Runs in document order, line breaks included.
    pub fn runs(&self) -> Ref<'_, [Run]> {
        Ref::map(self.inner.borrow(), |data| data.runs.as_slice())
    }

    /// Number of runs, line breaks included.
    pub fn run_count(&self) -> usize {
        self.inner.borrow().runs.len()
    }

    /// XML of this paragraph, indented and without a declaration.
    pub fn serialize(&self) -> Result<String> {
        serialize(self, &SerializeOptions::default())
    }

    /// XML of this paragraph using the given options.
    pub fn serialize_with(&self, options: &SerializeOptions) -> Result<String> {
        serialize(self, options)
    }

    fn update_run_properties(&self, f: impl FnOnce(&mut RunProperties)) {
        let properties = self.inner.borrow_mut().run_properties();
        f(&mut properties.borrow_mut());
    }
}

impl ToXml for Paragraph {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        let data = self.inner.borrow();
        sink.start("w:p", &[])?;

        if let Some(alignment) = data.alignment {
            sink.start("w:pPr", &[])?;
            sink.empty("w:jc", &[("w:val", alignment.as_str())])?;
            sink.end("w:pPr")?;
        }

        for run in &data.runs {
            run.write_xml(sink)?;
        }

        sink.end("w:p")
    }
}
