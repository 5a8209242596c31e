/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// A builder call received an argument outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// XML writing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl OoxmlError {
    /// Build an [`OoxmlError::InvalidArgument`], logging the rejection.
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejected builder argument: {}", msg);
        OoxmlError::InvalidArgument(msg)
    }
}

/// Fail with [`OoxmlError::InvalidArgument`] unless `cond` holds.
#[inline]
pub(crate) fn ensure_arg(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(OoxmlError::invalid_argument(msg))
    }
}

/// Whether `c` may appear in XML 1.0 character data.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Fail with [`OoxmlError::InvalidArgument`] if `value` holds a character
/// XML 1.0 cannot represent (C0 controls other than tab/newline/carriage
/// return, U+FFFE, U+FFFF).
pub(crate) fn ensure_xml_text(value: &str, msg: &str) -> Result<()> {
    ensure_arg(value.chars().all(is_xml_char), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_arg() {
        assert!(ensure_arg(true, "unused").is_ok());
        let err = ensure_arg(false, "Size value not valid").unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidArgument(ref m) if m == "Size value not valid"));
        assert_eq!(err.to_string(), "Invalid argument: Size value not valid");
    }

    #[test]
    fn test_ensure_xml_text() {
        assert!(ensure_xml_text("plain\ttext\r\n", "unused").is_ok());
        assert!(ensure_xml_text("", "unused").is_ok());
        assert!(ensure_xml_text("\u{10FFFF}", "unused").is_ok());
        for bad in ["a\u{0}b", "a\u{1}b", "\u{B}", "\u{C}", "\u{1F}", "\u{FFFE}", "\u{FFFF}"] {
            let err = ensure_xml_text(bad, "String not valid").unwrap_err();
            assert!(matches!(err, OoxmlError::InvalidArgument(_)), "{bad:?}");
        }
    }
}
