//! Office Open XML support.

pub mod docx;
pub mod error;

pub use error::{OoxmlError, Result};
