//! docx-fluent - fluent builders for WordprocessingML content
//!
//! This library builds the XML for Word paragraphs, runs and tables through
//! chained calls, and writes it with the element and attribute order the
//! WordprocessingML schema requires.
//!
//! # Features
//!
//! - **Paragraphs**: text runs and line breaks sharing one run formatting
//!   (font, size, bold, italic, color) plus paragraph alignment
//! - **Tables**: rows, cells, widths, grid, layout, look and borders
//! - **Validation**: bad arguments are rejected when the call is made, never
//!   at serialization time
//! - **Serialization**: indented or compact fragments, or a full document
//!   body with an XML declaration
//!
//! # Example - Building a table
//!
//! ```
//! use docx_fluent::{Alignment, BorderStyle, Cell, DocumentBody, Paragraph, Row, Table};
//!
//! # fn main() -> docx_fluent::Result<()> {
//! let table = Table::create()
//!     .borders(12, BorderStyle::Single, Some("FF0000"), None)?
//!     .width_auto();
//!
//! let row = Row::create().height(400)?.cant_split();
//! for text in ["R1C1", "R1C2", "R1C3"] {
//!     row.add(Cell::create().add(Paragraph::create().text(&[text])?));
//! }
//! table.add(row);
//!
//! let mut body = DocumentBody::new();
//! body.add(Paragraph::create().text(&["Sales"])?.bold().align(Alignment::Center))
//!     .add(table);
//!
//! let xml = body.to_xml()?;
//! assert!(xml.contains("<w:t>R1C2</w:t>"));
//! # Ok(())
//! # }
//! ```

/// OOXML (Office Open XML) builders
///
/// This module provides the WordprocessingML builders and their error type.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::docx::format::{
    Alignment, BorderStyle, HeightRule, TableLayout, VerticalAlignment,
};
pub use ooxml::docx::writer::{
    BOOLEAN_FALSE, BOOLEAN_TRUE, BlockContent, Border, Cell, DocumentBody, OnOff, Paragraph, Row,
    SerializeOptions, Table, build_border, color_to_hex,
};
pub use ooxml::error::{OoxmlError, Result};
