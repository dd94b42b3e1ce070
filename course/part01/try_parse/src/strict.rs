use std::num::{IntErrorKind, ParseIntError};

use crate::attempt::TryParse;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("input was empty")]
    Empty,
    #[error("input was not a decimal integer")]
    InvalidDigit,
    #[error("value was outside the range of the target type")]
    Overflow,
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::Empty => ParseError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow,
            _ => ParseError::InvalidDigit,
        }
    }
}

/// Reads `text` as a `T`, failing with the reason it could not be read.
///
/// Accepts exactly the inputs that [`TryParse::try_parse`] accepts.
pub fn parse_strict<T: TryParse>(text: &str) -> Result<T, ParseError> {
    T::from_decimal(trim_integer_whitespace(text))
}

// tab, line feed, vertical tab, form feed, carriage return and space
fn trim_integer_whitespace(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, '\t'..='\r' | ' '))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("123" => Ok(123); "digits")]
    #[test_case("" => Err(ParseError::Empty); "empty")]
    #[test_case(" \t\r\n" => Err(ParseError::Empty); "whitespace only")]
    #[test_case("-" => Err(ParseError::InvalidDigit); "sign only")]
    #[test_case("12.5" => Err(ParseError::InvalidDigit); "decimal point")]
    #[test_case("\u{b}7\u{c}" => Ok(7); "vertical tab and form feed trimmed")]
    #[test_case("\u{a0}7" => Err(ParseError::InvalidDigit); "non breaking space is not trimmed")]
    #[test_case("99999999999999999999" => Err(ParseError::Overflow); "too large")]
    #[test_case("-99999999999999999999" => Err(ParseError::Overflow); "too small")]
    fn strict_i32(text: &str) -> Result<i32, ParseError> {
        parse_strict(text)
    }

    #[test_case("-5" => Err(ParseError::Overflow); "negative unsigned")]
    #[test_case("-x" => Err(ParseError::InvalidDigit); "negative garbage")]
    #[test_case("-" => Err(ParseError::InvalidDigit); "sign only")]
    fn strict_u32(text: &str) -> Result<u32, ParseError> {
        parse_strict(text)
    }

    #[test]
    fn error_messages() {
        assert_eq!("input was empty", ParseError::Empty.to_string());
        assert_eq!(
            "value was outside the range of the target type",
            parse_strict::<u8>("300").unwrap_err().to_string()
        );
    }
}
