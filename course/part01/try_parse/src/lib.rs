pub mod attempt;
pub mod config;
pub mod convert;
pub mod repl;
pub mod strict;
pub mod tracing_init;

pub use attempt::{ParseAttempt, TryParse};
pub use strict::{parse_strict, ParseError};

/// Attempts to read `text` as an `i32`, returning whether it worked alongside the value.
///
/// Malformed or out of range input gives `(false, 0)` rather than an error, so callers
/// branch on the flag instead of handling a failure.
pub fn try_parse(text: &str) -> (bool, i32) {
    i32::try_parse(text).into_parts()
}
