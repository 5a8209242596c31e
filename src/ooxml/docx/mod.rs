//! WordprocessingML (.docx) content builders.
//!
//! Paragraphs, runs, tables, rows and cells are assembled with the fluent
//! types in [`writer`] and written out as schema-ordered XML. Packaging the
//! result into a `.docx` archive is outside this module.

pub mod format;
pub mod writer;

pub use format::{Alignment, BorderStyle, HeightRule, TableLayout, VerticalAlignment};
pub use writer::{
    BlockContent, Border, Cell, DocumentBody, Paragraph, Row, SerializeOptions, Table,
};
