//! Fluent builders for DOCX content.
//!
//! This module provides the builder API for paragraphs, runs and tables, and
//! the serializer they share.

pub mod body;
pub mod factory;
pub mod paragraph;
pub mod run;
pub mod table;
pub mod xml;

// Re-export body types
pub use body::DocumentBody;

// Re-export factory types
pub use factory::{
    BOOLEAN_FALSE, BOOLEAN_TRUE, Border, MAX_BORDER_SIZE, MIN_BORDER_SIZE, OnOff, build_border,
    color_to_hex,
};

// Re-export paragraph types
pub use paragraph::{Paragraph, TextPart};

// Re-export run types
pub use run::{Run, RunContent, RunProperties, SharedRunProperties};

// Re-export table types
pub use table::{
    BlockContent, Cell, CellProperties, Row, RowProperty, Shading, Table, TableBorders,
    TableWidth,
};

// Re-export serializer types
pub use xml::{SerializeOptions, ToXml, WML_NAMESPACE, XmlSink, serialize};
