use crate::strict::{parse_strict, ParseError};

/// The outcome of one conversion request. Never both, never neither.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseAttempt<T> {
    Success(T),
    Failure,
}

impl<T> ParseAttempt<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseAttempt::Success(_))
    }

    pub fn success(self) -> Option<T> {
        self.into()
    }

    /// Splits into a success flag and a value, using `T::default()` on failure.
    pub fn into_parts(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            ParseAttempt::Success(value) => (true, value),
            ParseAttempt::Failure => (false, T::default()),
        }
    }
}

impl<T> From<Option<T>> for ParseAttempt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => ParseAttempt::Success(value),
            None => ParseAttempt::Failure,
        }
    }
}

impl<T, E> From<Result<T, E>> for ParseAttempt<T> {
    fn from(value: Result<T, E>) -> Self {
        value.ok().into()
    }
}

impl<T> From<ParseAttempt<T>> for Option<T> {
    fn from(attempt: ParseAttempt<T>) -> Self {
        match attempt {
            ParseAttempt::Success(value) => Some(value),
            ParseAttempt::Failure => None,
        }
    }
}

/// Integer types that can be read from decimal text.
///
/// Accepted text is optional surrounding whitespace, an optional sign and at least one
/// ASCII digit. Anything else, including values outside the range of `Self`, fails.
pub trait TryParse: Sized + Copy + Default {
    /// Reads an already trimmed string. Prefer [`TryParse::try_parse`] or [`parse_strict`].
    fn from_decimal(trimmed: &str) -> Result<Self, ParseError>;

    fn try_parse(text: &str) -> ParseAttempt<Self> {
        parse_strict::<Self>(text).into()
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl TryParse for $t {
                fn from_decimal(trimmed: &str) -> Result<Self, ParseError> {
                    trimmed.parse::<$t>().map_err(ParseError::from)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryParse for $t {
                fn from_decimal(trimmed: &str) -> Result<Self, ParseError> {
                    match trimmed.strip_prefix('-') {
                        Some(magnitude) => negative_magnitude(magnitude).map(|()| 0),
                        None => trimmed.parse::<$t>().map_err(ParseError::from),
                    }
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

// unsigned types take "-0" (and "-000") but nothing below zero
fn negative_magnitude(magnitude: &str) -> Result<(), ParseError> {
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDigit);
    }

    if magnitude.bytes().all(|b| b == b'0') {
        Ok(())
    } else {
        Err(ParseError::Overflow)
    }
}
