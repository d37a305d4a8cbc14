use std::fmt;

use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    EmptyEntry {
        field: &'static str,
        index: usize,
    },
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    InvalidUrl {
        field: &'static str,
        input: String,
    },
    UnknownLanguage {
        field: &'static str,
        input: String,
    },
    InvalidChoice {
        field: &'static str,
        input: String,
        expected: &'static [&'static str],
    },
    MissingParameter {
        field: &'static str,
    },
}

impl ValidationError {
    /// Whether this error reports a required request field left unset.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::EmptyEntry { field, index } => {
                write!(f, "{field} entry at index {index} must not be empty")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input}"),
            Self::UnknownLanguage { field, input } => {
                write!(f, "{field} is not a supported language code: {input}")
            }
            Self::InvalidChoice {
                field,
                input,
                expected,
            } => write!(
                f,
                "{field} must be one of {}: {input}",
                expected.join(", ")
            ),
            Self::MissingParameter { field } => write!(f, "missing required parameter {field}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// String whose trimmed length is non-zero.
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Integer `>= 1`. Floats never qualify, even integral ones.
pub fn is_positive_int(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| n >= 1)
}

/// Integer `>= 0`.
pub fn is_non_negative_int(value: &Value) -> bool {
    value.as_u64().is_some()
}

/// Exact membership of a JSON string in `choices`.
///
/// Only strings can match: booleans, numbers and containers are always rejected.
pub fn is_one_of(value: &Value, choices: &[&str]) -> bool {
    match value {
        Value::String(s) => choices.contains(&s.as_str()),
        _ => false,
    }
}

/// `http`/`https` URL whose host is a dotted IPv4 address or a dotted domain
/// name ending in an alphabetic label of 2 to 6 characters.
///
/// The host is checked as written, before any normalization: integer,
/// shorthand or hex IPv4 forms and non-ASCII domains are rejected.
pub fn matches_url_shape(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(url) = Url::parse(input) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    if !url.username().is_empty() || url.password().is_some() {
        return false;
    }

    let Some(host) = raw_host(input) else {
        return false;
    };
    is_dotted_ipv4(host) || domain_matches_shape(host)
}

/// Host exactly as it appears in `input`: between `://` and the first `:`,
/// `/`, `?` or `#`.
fn raw_host(input: &str) -> Option<&str> {
    let (_, rest) = input.split_once("://")?;
    let end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn is_dotted_ipv4(host: &str) -> bool {
    let octets: Vec<&str> = host.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            (1..=3).contains(&octet.len())
                && octet.chars().all(|c| c.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}

fn domain_matches_shape(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let tld_ok = (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic());
    let labels_ok = labels.split('.').all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    tld_ok && labels_ok
}

/// Membership in the closed set of Translate language codes.
pub fn matches_language_code(input: &str) -> bool {
    crate::domain::value::LanguageCode::from_code(input).is_some()
}
