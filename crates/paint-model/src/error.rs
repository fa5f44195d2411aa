use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("component index {index} out of range (mix has {len} components)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
    #[error("unknown swatch: {0}")]
    UnknownSwatch(String),
    #[error("template {name} lists {swatches} swatches but {percentages} percentages")]
    TemplateMismatch {
        name: String,
        swatches: usize,
        percentages: usize,
    },
}

/// Failure to read a `#rrggbb` color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, found {0} bytes")]
    InvalidLength(usize),
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
