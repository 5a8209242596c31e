//! Shared formatting enumerations for WordprocessingML builders.

use crate::ooxml::error::{OoxmlError, Result};
use phf::phf_map;
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment (`w:jc`) for paragraphs, rows and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Justified on both margins
    Justify,
    Distribute,
    Start,
    End,
}

impl Alignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
            Self::Distribute => "distribute",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Vertical alignment of the content of a table cell (`w:vAlign`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Both,
}

impl VerticalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Both => "both",
        }
    }
}

/// Rule applied to a row height (`w:hRule`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightRule {
    Auto,
    #[default]
    Exact,
    AtLeast,
}

impl HeightRule {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::AtLeast => "atLeast",
        }
    }
}

/// Table layout algorithm (`w:tblLayout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    Fixed,
    Autofit,
}

impl TableLayout {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Autofit => "autofit",
        }
    }
}

/// Border line styles (`ST_Border`).
///
/// `Nil` and `None` are both "no line" markers: a border carrying either of
/// them is written with its style only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    Nil,
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Triple,
    ThinThickSmallGap,
    ThickThinSmallGap,
    ThinThickThinSmallGap,
    ThinThickMediumGap,
    ThickThinMediumGap,
    ThinThickThinMediumGap,
    ThinThickLargeGap,
    ThickThinLargeGap,
    ThinThickThinLargeGap,
    Wave,
    DoubleWave,
    DashSmallGap,
    DashDotStroked,
    ThreeDEmboss,
    ThreeDEngrave,
    Outset,
    Inset,
    Apples,
    ZigZag,
}

static BORDER_STYLES: phf::Map<&'static str, BorderStyle> = phf_map! {
    "nil" => BorderStyle::Nil,
    "none" => BorderStyle::None,
    "single" => BorderStyle::Single,
    "thick" => BorderStyle::Thick,
    "double" => BorderStyle::Double,
    "dotted" => BorderStyle::Dotted,
    "dashed" => BorderStyle::Dashed,
    "dotDash" => BorderStyle::DotDash,
    "dotDotDash" => BorderStyle::DotDotDash,
    "triple" => BorderStyle::Triple,
    "thinThickSmallGap" => BorderStyle::ThinThickSmallGap,
    "thickThinSmallGap" => BorderStyle::ThickThinSmallGap,
    "thinThickThinSmallGap" => BorderStyle::ThinThickThinSmallGap,
    "thinThickMediumGap" => BorderStyle::ThinThickMediumGap,
    "thickThinMediumGap" => BorderStyle::ThickThinMediumGap,
    "thinThickThinMediumGap" => BorderStyle::ThinThickThinMediumGap,
    "thinThickLargeGap" => BorderStyle::ThinThickLargeGap,
    "thickThinLargeGap" => BorderStyle::ThickThinLargeGap,
    "thinThickThinLargeGap" => BorderStyle::ThinThickThinLargeGap,
    "wave" => BorderStyle::Wave,
    "doubleWave" => BorderStyle::DoubleWave,
    "dashSmallGap" => BorderStyle::DashSmallGap,
    "dashDotStroked" => BorderStyle::DashDotStroked,
    "threeDEmboss" => BorderStyle::ThreeDEmboss,
    "threeDEngrave" => BorderStyle::ThreeDEngrave,
    "outset" => BorderStyle::Outset,
    "inset" => BorderStyle::Inset,
    "apples" => BorderStyle::Apples,
    "zigZag" => BorderStyle::ZigZag,
};

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::None => "none",
            Self::Single => "single",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Triple => "triple",
            Self::ThinThickSmallGap => "thinThickSmallGap",
            Self::ThickThinSmallGap => "thickThinSmallGap",
            Self::ThinThickThinSmallGap => "thinThickThinSmallGap",
            Self::ThinThickMediumGap => "thinThickMediumGap",
            Self::ThickThinMediumGap => "thickThinMediumGap",
            Self::ThinThickThinMediumGap => "thinThickThinMediumGap",
            Self::ThinThickLargeGap => "thinThickLargeGap",
            Self::ThickThinLargeGap => "thickThinLargeGap",
            Self::ThinThickThinLargeGap => "thinThickThinLargeGap",
            Self::Wave => "wave",
            Self::DoubleWave => "doubleWave",
            Self::DashSmallGap => "dashSmallGap",
            Self::DashDotStroked => "dashDotStroked",
            Self::ThreeDEmboss => "threeDEmboss",
            Self::ThreeDEngrave => "threeDEngrave",
            Self::Outset => "outset",
            Self::Inset => "inset",
            Self::Apples => "apples",
            Self::ZigZag => "zigZag",
        }
    }

    /// Whether this style means "no line" (`nil` or `none`).
    #[inline]
    pub fn is_no_line(&self) -> bool {
        matches!(self, Self::Nil | Self::None)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = OoxmlError;

    /// Parse the schema spelling of a border style (e.g. `"zigZag"`).
    fn from_str(s: &str) -> Result<Self> {
        BORDER_STYLES
            .get(s)
            .copied()
            .ok_or_else(|| OoxmlError::invalid_argument(format!("Unknown border style: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_parse() {
        assert_eq!("zigZag".parse::<BorderStyle>().unwrap(), BorderStyle::ZigZag);
        assert_eq!("nil".parse::<BorderStyle>().unwrap(), BorderStyle::Nil);
        assert!("ZIGZAG".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn test_border_style_table_matches_as_str() {
        for (name, style) in BORDER_STYLES.entries() {
            assert_eq!(style.as_str(), *name);
        }
    }

    #[test]
    fn test_no_line_styles() {
        assert!(BorderStyle::Nil.is_no_line());
        assert!(BorderStyle::None.is_no_line());
        assert!(!BorderStyle::Single.is_no_line());
    }

    #[test]
    fn test_alignment_values() {
        assert_eq!(Alignment::Justify.as_str(), "both");
        assert_eq!(Alignment::Center.as_str(), "center");
        assert_eq!(HeightRule::default(), HeightRule::Exact);
        assert_eq!(HeightRule::AtLeast.as_str(), "atLeast");
        assert_eq!(TableLayout::Fixed.as_str(), "fixed");
        assert_eq!(VerticalAlignment::Center.as_str(), "center");
    }
}
