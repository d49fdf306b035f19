//! Decoding of the textual label and value inputs.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult, InputField};

/// Ordered category labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(pub Vec<String>);

/// Ordered numeric samples of the single data series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSeries(pub Vec<f64>);

impl LabelSet {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueSeries {
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<Vec<f64>> for ValueSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Replaces every single quote with a double quote.
///
/// A label that itself contains `"` or `'` does not survive this step: the
/// result is either invalid JSON or a differently split array.
#[must_use]
pub fn normalize_quotes(source: &str) -> String {
    source.replace('\'', "\"")
}

/// Decodes single-quoted label text such as `['Jan','Feb']`.
pub fn decode_labels(source: &str) -> ChartResult<LabelSet> {
    let normalized = normalize_quotes(source);
    let labels: Vec<String> = serde_json::from_str(&normalized).map_err(|err| {
        warn!(error = %err, "label text is not a json string array after normalization");
        ChartError::Decode {
            field: InputField::Labels,
            message: err.to_string(),
        }
    })?;
    trace!(count = labels.len(), "decoded labels");
    Ok(LabelSet(labels))
}

/// Decodes JSON number-array text such as `[10, 20.5]`.
pub fn decode_values(source: &str) -> ChartResult<ValueSeries> {
    let values: Vec<f64> = serde_json::from_str(source).map_err(|err| {
        warn!(error = %err, "value text is not a json number array");
        ChartError::Decode {
            field: InputField::Values,
            message: err.to_string(),
        }
    })?;
    trace!(count = values.len(), "decoded values");
    Ok(ValueSeries(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_quotes_only_touches_single_quotes() {
        assert_eq!(normalize_quotes("['a', \"b\"]"), "[\"a\", \"b\"]");
        assert_eq!(normalize_quotes("[]"), "[]");
    }

    #[test]
    fn labels_accept_double_quoted_source() {
        let labels = decode_labels("[\"x\",\"y\"]").expect("decode");
        assert_eq!(labels.as_slice(), ["x", "y"]);
    }

    #[test]
    fn apostrophe_in_label_breaks_decoding() {
        let err = decode_labels("['O'Brien']").expect_err("should fail");
        assert!(matches!(
            err,
            ChartError::Decode {
                field: InputField::Labels,
                ..
            }
        ));
    }

    #[test]
    fn values_are_not_normalized() {
        let err = decode_values("['1']").expect_err("single quotes are invalid json");
        assert!(matches!(
            err,
            ChartError::Decode {
                field: InputField::Values,
                ..
            }
        ));
    }

    #[test]
    #[allow(clippy::excessive_precision)]
    fn values_keep_exact_bits_of_seventeen_digit_literals() {
        for (text, expected) in [
            ("[1.1203778759533633e-10]", 1.1203778759533633e-10_f64),
            ("[2.2112647588890446e-23]", 2.2112647588890446e-23_f64),
            ("[2.2250738585072011e-308]", 2.2250738585072011e-308_f64),
        ] {
            let values = decode_values(text).expect("decode");
            assert_eq!(values.len(), 1);
            assert_eq!(values.as_slice()[0].to_bits(), expected.to_bits(), "{text}");
        }
    }

    #[test]
    fn values_reject_non_numeric_entries() {
        assert!(decode_values("[1, \"2\"]").is_err());
        assert!(decode_values("[1, null]").is_err());
        assert!(decode_values("{\"a\": 1}").is_err());
    }
}
