use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Input field a decode failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Labels,
    Values,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Labels => f.write_str("labels"),
            Self::Values => f.write_str("values"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    #[error("failed to decode {field}: {message}")]
    Decode { field: InputField, message: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error on `{path}`: {message}")]
    Io { path: String, message: String },
}
