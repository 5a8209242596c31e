//! Small formatting values shared across the builders.
//!
//! Borders and on/off flags are built here so that range checks live in one
//! place. Built values are immutable; builders share them by reference.

use crate::ooxml::error::{Result, ensure_arg, ensure_xml_text};

use super::super::format::BorderStyle;
use super::xml::XmlSink;

/// Smallest accepted border width, in eighths of a point.
pub const MIN_BORDER_SIZE: u32 = 2;
/// Largest accepted border width, in eighths of a point.
pub const MAX_BORDER_SIZE: u32 = 96;

/// On/off property whose omitted value means "on" (`ST_OnOff`, default true).
#[derive(Debug, PartialEq, Eq)]
pub struct OnOff {
    val: Option<bool>,
}

/// Shared "on" marker, written as a bare element (`<w:b/>`).
pub static BOOLEAN_TRUE: OnOff = OnOff { val: None };
/// Shared "off" marker, written with `w:val="false"`.
pub static BOOLEAN_FALSE: OnOff = OnOff { val: Some(false) };

impl OnOff {
    /// Explicit value, `None` when the attribute is omitted.
    pub fn val(&self) -> Option<bool> {
        self.val
    }

    /// Effective value, defaulting to `true`.
    pub fn is_on(&self) -> bool {
        self.val.unwrap_or(true)
    }

    pub(crate) fn write_xml(&self, sink: &mut XmlSink, name: &str) -> Result<()> {
        match self.val {
            None => sink.empty(name, &[]),
            Some(v) => sink.empty(name, &[("w:val", if v { "true" } else { "false" })]),
        }
    }
}

/// A single border edge (`CT_Border`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    style: BorderStyle,
    color: Option<String>,
    size: Option<u32>,
    space: Option<u32>,
}

impl Border {
    /// Line style.
    pub fn style(&self) -> BorderStyle {
        self.style
    }

    /// Line color (`RRGGBB` or `auto`), if set.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Width in eighths of a point, if set.
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// Spacing offset in points, if set.
    pub fn space(&self) -> Option<u32> {
        self.space
    }

    pub(crate) fn write_xml(&self, sink: &mut XmlSink, name: &str) -> Result<()> {
        let mut sz = itoa::Buffer::new();
        let mut space = itoa::Buffer::new();
        let mut attrs: Vec<(&str, &str)> = Vec::with_capacity(4);
        attrs.push(("w:val", self.style.as_str()));
        if let Some(ref color) = self.color {
            attrs.push(("w:color", color.as_str()));
        }
        if let Some(size) = self.size {
            attrs.push(("w:sz", sz.format(size)));
        }
        if let Some(value) = self.space {
            attrs.push(("w:space", space.format(value)));
        }
        sink.empty(name, &attrs)
    }
}

/// Convert an RGB color (`0xRRGGBB`) to its 6-digit lowercase hex form.
///
/// Bits above the low 24 (an alpha channel, for instance) are ignored.
///
/// # Examples
///
/// ```
/// use docx_fluent::color_to_hex;
/// assert_eq!(color_to_hex(0xFF0000), "ff0000");
/// assert_eq!(color_to_hex(0xFF00FF00), "00ff00");
/// ```
pub fn color_to_hex(color: u32) -> String {
    format!("{:06x}", color & 0x00FF_FFFF)
}

/// Build a border edge.
///
/// `size` is in eighths of a point and must lie in
/// [`MIN_BORDER_SIZE`]..=[`MAX_BORDER_SIZE`]. A "no line" style (`Nil` or
/// `None`) produces a style-only border and ignores every other argument.
/// Otherwise the size is always kept, while an empty or missing color and a
/// missing space are left unset.
pub fn build_border(
    size: u32,
    style: BorderStyle,
    color: Option<&str>,
    space: Option<u32>,
) -> Result<Border> {
    ensure_arg(
        (MIN_BORDER_SIZE..=MAX_BORDER_SIZE).contains(&size),
        "Size value not valid",
    )?;
    if let Some(color) = color {
        ensure_xml_text(color, "String color not valid")?;
    }

    let mut border = Border {
        style,
        color: None,
        size: None,
        space: None,
    };
    if !style.is_no_line() {
        border.color = color.filter(|c| !c.is_empty()).map(str::to_string);
        border.space = space;
        border.size = Some(size);
    }
    Ok(border)
}
