//! Text codec for ADC reading lines.
//!
//! Wire format:
//! ```text
//! ADC: <value>\n
//! ```
//! `<value>` is a base-10 integer with no padding.  Lines are delimited by a
//! single `\n`; there is no length prefix and no versioning.

use std::fmt;

use thiserror::Error;

/// Literal text that starts every reading line.
pub const LINE_PREFIX: &str = "ADC: ";

/// Errors that can occur while parsing a reading line.
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    /// The line bytes are not valid UTF-8.
    #[error("line is not valid UTF-8")]
    NotUtf8,

    /// The line does not begin with `ADC: `.
    #[error("missing \"ADC: \" prefix in line {0:?}")]
    MissingPrefix(String),

    /// The text after the prefix is not an integer.
    #[error("invalid reading value {0:?}")]
    InvalidValue(String),

    /// A line ran past the decoder's length cap before its newline.
    #[error("line exceeds {limit} bytes ({dropped} bytes dropped)")]
    LineTooLong { limit: usize, dropped: usize },
}

/// A single sampled converter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdcReading(pub i32);

impl AdcReading {
    /// Returns the raw sampled value.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AdcReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LINE_PREFIX, self.0)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Formats a reading as one newline-terminated wire line.
///
/// # Examples
///
/// ```rust
/// use adc_core::{encode_reading, AdcReading};
///
/// assert_eq!(encode_reading(AdcReading(512)), "ADC: 512\n");
/// ```
pub fn encode_reading(reading: AdcReading) -> String {
    format!("{reading}\n")
}

/// Parses one line into an [`AdcReading`].
///
/// A trailing `\n` or `\r\n` is accepted and ignored, so the function works
/// on both raw lines from [`crate::LineDecoder`] and already-trimmed text.
///
/// # Errors
///
/// Returns [`FrameError`] if the bytes are not UTF-8, the prefix is missing,
/// or the value is not an integer.
///
/// # Examples
///
/// ```rust
/// use adc_core::{parse_line, AdcReading};
///
/// assert_eq!(parse_line(b"ADC: 7\n").unwrap(), AdcReading(7));
/// assert!(parse_line(b"hello\n").is_err());
/// ```
pub fn parse_line(line: &[u8]) -> Result<AdcReading, FrameError> {
    let text = std::str::from_utf8(line).map_err(|_| FrameError::NotUtf8)?;
    let text = text
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text);

    let value = text
        .strip_prefix(LINE_PREFIX)
        .ok_or_else(|| FrameError::MissingPrefix(text.to_string()))?;

    value
        .parse::<i32>()
        .map(AdcReading)
        .map_err(|_| FrameError::InvalidValue(value.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_reading(AdcReading(0)), "ADC: 0\n");
    }

    #[test]
    fn test_encode_max_10_bit_value() {
        assert_eq!(encode_reading(AdcReading(1023)), "ADC: 1023\n");
    }

    #[test]
    fn test_encode_is_single_line() {
        let line = encode_reading(AdcReading(42));
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_display_has_no_newline() {
        assert_eq!(AdcReading(9).to_string(), "ADC: 9");
    }

    #[test]
    fn test_parse_without_newline() {
        assert_eq!(parse_line(b"ADC: 300").unwrap(), AdcReading(300));
    }

    #[test]
    fn test_parse_crlf_line() {
        assert_eq!(parse_line(b"ADC: 12\r\n").unwrap(), AdcReading(12));
    }

    #[test]
    fn test_parse_negative_value() {
        // The format itself does not restrict the sign; only the sampler does.
        assert_eq!(parse_line(b"ADC: -5\n").unwrap(), AdcReading(-5));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq!(
            parse_line(b"DAC: 1\n"),
            Err(FrameError::MissingPrefix("DAC: 1".to_string()))
        );
    }

    #[test]
    fn test_parse_prefix_without_space() {
        assert!(matches!(
            parse_line(b"ADC:1\n"),
            Err(FrameError::MissingPrefix(_))
        ));
    }

    #[test]
    fn test_parse_non_integer_value() {
        assert_eq!(
            parse_line(b"ADC: 1.5\n"),
            Err(FrameError::InvalidValue("1.5".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_value() {
        assert_eq!(
            parse_line(b"ADC: \n"),
            Err(FrameError::InvalidValue(String::new()))
        );
    }

    #[test]
    fn test_parse_invalid_utf8() {
        assert_eq!(parse_line(&[0xFF, 0xFE, b'\n']), Err(FrameError::NotUtf8));
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(AdcReading(77).value(), 77);
    }
}
