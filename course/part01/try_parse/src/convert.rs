//! Conversions between numeric types that need no text at all.

use crate::attempt::ParseAttempt;

/// Every `i32` fits in an `f64`, so this can never lose information.
pub fn widen(value: i32) -> f64 {
    f64::from(value)
}

/// Drops the fractional part, rounding toward zero.
///
/// Values beyond the range of `i32` saturate to `i32::MIN`/`i32::MAX` and `NaN` becomes `0`.
pub fn truncate(value: f64) -> i32 {
    value as i32
}

/// Checked narrowing: fails instead of wrapping when `value` does not fit in `T`.
pub fn narrow<T: TryFrom<i64>>(value: i64) -> ParseAttempt<T> {
    T::try_from(value).into()
}
