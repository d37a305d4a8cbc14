use std::fmt;

/// Shape a field was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    NonEmptyString,
    PositiveInteger,
    NonNegativeInteger,
    Numeric,
    Object,
    Array,
    NonEmptyArray,
    Literal(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("a string"),
            Self::NonEmptyString => f.write_str("a non-empty string"),
            Self::PositiveInteger => f.write_str("a positive integer"),
            Self::NonNegativeInteger => f.write_str("a non-negative integer"),
            Self::Numeric => f.write_str("a number or numeric string"),
            Self::Object => f.write_str("an object"),
            Self::Array => f.write_str("an array"),
            Self::NonEmptyArray => f.write_str("a non-empty array"),
            Self::Literal(value) => write!(f, "\"{value}\""),
        }
    }
}

/// A response body did not have the shape the parsers expect.
///
/// Always fatal for the whole document: no partially parsed value survives.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("undecodable response")]
    Undecodable(#[source] Option<serde_json::Error>),

    #[error("invalid error format")]
    InvalidErrorFormat,

    #[error("missing {record} field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("invalid {record} field `{field}`: expected {expected}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        expected: Expected,
    },

    #[error("invalid {record} field `{field}` at index {index}: expected {expected}")]
    InvalidElement {
        record: &'static str,
        field: &'static str,
        index: usize,
        expected: Expected,
    },

    #[error("invalid {record} field `{field}` at index [{group}][{index}]: expected {expected}")]
    InvalidNestedElement {
        record: &'static str,
        field: &'static str,
        group: usize,
        index: usize,
        expected: Expected,
    },

    #[error(
        "invalid {record} field `{field}` entry `{key}`: expected a single-element array holding one object"
    )]
    InvalidWrapping {
        record: &'static str,
        field: &'static str,
        key: String,
    },
}

impl ParseError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidField { field, .. }
            | Self::InvalidElement { field, .. }
            | Self::InvalidNestedElement { field, .. }
            | Self::InvalidWrapping { field, .. } => Some(field),
            Self::Undecodable(_) | Self::InvalidErrorFormat => None,
        }
    }
}
