use serde::{Deserialize, Serialize};

/// Y-axis tick options. Every tick label is the tick value followed by
/// `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOptions {
    pub suffix: String,
}

impl TickOptions {
    #[must_use]
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let mut text = format_number(value);
        text.push_str(&self.suffix);
        text
    }
}

/// Prints a number the way the browser's number-to-string conversion does:
/// no trailing `.0`, exponent notation outside `[1e-6, 1e21)`, `-0` as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(12.75), "12.75");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn extremes_switch_to_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn suffix_is_appended() {
        let ticks = TickOptions::with_suffix("€");
        assert_eq!(ticks.format(42.0), "42€");
        assert_eq!(TickOptions::with_suffix("").format(1.5), "1.5");
    }
}
