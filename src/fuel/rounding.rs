use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{field_name} must be finite")));
    }
    Decimal::from_f64_retain(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} is out of decimal range"))
    })
}

/// Rounds the exact binary value of `value` to `places` decimals, ties to even.
pub fn round_half_even(value: f64, places: u32, field_name: &str) -> ChartResult<f64> {
    let rounded = to_decimal(value, field_name)?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    decimal_to_f64(rounded, field_name)
}

/// Rounds to the nearest integer, ties to even.
pub fn round_to_integer(value: f64, field_name: &str) -> ChartResult<i64> {
    to_decimal(value, field_name)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| ChartError::InvalidData(format!("{field_name} does not fit in i64")))
}

/// Groups digits in threes with `.` as the separator: `12345` -> `12.345`.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
