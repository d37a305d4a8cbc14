use std::fmt;
use std::str::FromStr;

use crate::domain::validation::{ValidationError, matches_url_shape};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Google API key (`key`).
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by Google (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom Search query text (`q`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct SearchQuery(String);

impl SearchQuery {
    /// Query parameter name used by Google (`q`).
    pub const FIELD: &'static str = "q";

    /// Create a validated query.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the query as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom search engine id (`cx`).
///
/// Invariant: non-empty after trimming.
pub struct SearchEngineId(String);

impl SearchEngineId {
    /// Query parameter name used by Google (`cx`).
    pub const FIELD: &'static str = "cx";

    /// Create a validated [`SearchEngineId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated engine id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL of a linked custom search engine specification (`cref`).
pub struct SpecUrl(String);

impl SpecUrl {
    /// Query parameter name used by Google (`cref`).
    pub const FIELD: &'static str = "cref";

    /// Create a validated [`SpecUrl`]; see [`matches_url_shape`] for the accepted shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !matches_url_shape(&value) {
            return Err(ValidationError::InvalidUrl {
                field: Self::FIELD,
                input: value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const LANGUAGE_RESTRICTIONS: &[&str] = &[
    "ar", "bg", "ca", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "hr", "hu", "id", "is",
    "it", "iw", "ja", "ko", "lt", "lv", "nl", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv",
    "tr", "zh-CN", "zh-TW",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom Search language restriction (`lr`), e.g. `lang_en`.
pub struct LanguageRestriction(String);

impl LanguageRestriction {
    /// Query parameter name used by Google (`lr`).
    pub const FIELD: &'static str = "lr";

    const PREFIX: &'static str = "lang_";

    /// Create a validated restriction from its full wire form (`lang_<code>`).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let known = value
            .strip_prefix(Self::PREFIX)
            .is_some_and(|code| LANGUAGE_RESTRICTIONS.contains(&code));
        if !known {
            return Err(ValidationError::UnknownLanguage {
                field: Self::FIELD,
                input: value,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of search results to return (`num`).
pub struct NumberOfResults(u32);

impl NumberOfResults {
    /// Query parameter name used by Google (`num`).
    pub const FIELD: &'static str = "num";

    /// Minimum allowed value.
    pub const MIN: u32 = 1;
    /// Maximum allowed value.
    pub const MAX: u32 = 10;
    /// Value the API applies when `num` is not sent.
    pub const API_DEFAULT: u32 = 10;

    /// Create a validated result count.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Index of the first result to return (`start`).
///
/// Invariant: `1..=(101 - num)`; the upper bound depends on the requested
/// [`NumberOfResults`], so the request builder checks it again on every change.
pub struct StartIndex(u32);

impl StartIndex {
    /// Query parameter name used by Google (`start`).
    pub const FIELD: &'static str = "start";

    /// Create a start index valid for a page of `number_of_results` results.
    pub fn new(value: u32, number_of_results: Option<NumberOfResults>) -> Result<Self, ValidationError> {
        let max = Self::max_for(number_of_results);
        if !(1..=max).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Highest start index the API accepts for the given page size.
    pub fn max_for(number_of_results: Option<NumberOfResults>) -> u32 {
        let num = number_of_results.map_or(NumberOfResults::API_DEFAULT, NumberOfResults::value);
        101 - num
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Custom Search safety level (`safe`).
pub enum SafetyLevel {
    High,
    Medium,
    Off,
}

impl SafetyLevel {
    /// Query parameter name used by Google (`safe`).
    pub const FIELD: &'static str = "safe";

    const CHOICES: &'static [&'static str] = &["high", "medium", "off"];

    /// Wire value of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Off => "off",
        }
    }
}

impl FromStr for SafetyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidChoice {
                field: Self::FIELD,
                input: other.to_owned(),
                expected: Self::CHOICES,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Translate source text format (`format`).
pub enum TextFormat {
    Text,
    Html,
}

impl TextFormat {
    /// Query parameter name used by Google (`format`).
    pub const FIELD: &'static str = "format";

    const CHOICES: &'static [&'static str] = &["text", "html"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
        }
    }
}

impl FromStr for TextFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => Err(ValidationError::InvalidChoice {
                field: Self::FIELD,
                input: other.to_owned(),
                expected: Self::CHOICES,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One text to translate (`q`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct SourceText(String);

impl SourceText {
    /// Query parameter name used by Google (`q`).
    pub const FIELD: &'static str = "q";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("ar", "Arabic"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("zh-CN", "Chinese Simplified"),
    ("zh-TW", "Chinese Traditional"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("et", "Estonian"),
    ("tl", "Filipino"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gl", "Galician"),
    ("de", "German"),
    ("el", "Greek"),
    ("ht", "Haitian Creole"),
    ("iw", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("mk", "Macedonian"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("no", "Norwegian"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sr", "Serbian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("es", "Spanish"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("yi", "Yiddish"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Language supported by Google Translate.
///
/// Only codes from a fixed table are representable; lookups are exact and
/// case-sensitive (`zh-CN`, not `zh-cn`).
pub struct LanguageCode {
    code: &'static str,
    name: &'static str,
}

impl LanguageCode {
    /// Look up a code in the supported table.
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|&(code, name)| Self { code, name })
    }

    /// Look up a code, reporting an error against `field` when unknown.
    pub fn for_field(field: &'static str, code: &str) -> Result<Self, ValidationError> {
        Self::from_code(code).ok_or_else(|| ValidationError::UnknownLanguage {
            field,
            input: code.to_owned(),
        })
    }

    /// Every supported language, in table order.
    pub fn all() -> impl Iterator<Item = LanguageCode> {
        LANGUAGES.iter().map(|&(code, name)| Self { code, name })
    }

    pub fn code(self) -> &'static str {
        self.code
    }

    /// English display name, e.g. `"Chinese Simplified"`.
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_trimmed_and_rejects_blank() {
        assert_eq!(ApiKey::new("  key ").unwrap().as_str(), "key");
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn search_query_preserves_whitespace() {
        assert_eq!(SearchQuery::new(" red flowers ").unwrap().as_str(), " red flowers ");
        assert!(SearchQuery::new("").is_err());
    }

    #[test]
    fn spec_url_uses_url_shape_check() {
        assert!(SpecUrl::new("http://www.google.co.uk/").is_ok());
        assert!(matches!(
            SpecUrl::new("not a url"),
            Err(ValidationError::InvalidUrl { field: "cref", .. })
        ));
    }

    #[test]
    fn language_restriction_requires_prefix_and_known_code() {
        assert!(LanguageRestriction::new("lang_en").is_ok());
        assert!(LanguageRestriction::new("lang_zh-TW").is_ok());
        assert!(LanguageRestriction::new("en").is_err());
        assert!(LanguageRestriction::new("lang_xx").is_err());
        assert!(LanguageRestriction::new("lang_af").is_err());
    }

    #[test]
    fn number_of_results_range_is_enforced() {
        assert!(NumberOfResults::new(NumberOfResults::MIN).is_ok());
        assert!(NumberOfResults::new(NumberOfResults::MAX).is_ok());
        assert!(NumberOfResults::new(0).is_err());
        assert!(NumberOfResults::new(NumberOfResults::MAX + 1).is_err());
    }

    #[test]
    fn start_index_upper_bound_follows_page_size() {
        assert_eq!(StartIndex::max_for(None), 91);
        assert!(StartIndex::new(91, None).is_ok());
        assert!(StartIndex::new(92, None).is_err());
        assert!(StartIndex::new(0, None).is_err());

        let num = NumberOfResults::new(1).unwrap();
        assert!(StartIndex::new(100, Some(num)).is_ok());
        assert!(StartIndex::new(101, Some(num)).is_err());
    }

    #[test]
    fn safety_level_parsing_is_exact() {
        assert_eq!("high".parse::<SafetyLevel>().unwrap(), SafetyLevel::High);
        assert_eq!("off".parse::<SafetyLevel>().unwrap().as_str(), "off");
        assert!("High".parse::<SafetyLevel>().is_err());
        assert!("true".parse::<SafetyLevel>().is_err());
        assert!("1".parse::<SafetyLevel>().is_err());
    }

    #[test]
    fn text_format_parsing_is_exact() {
        assert_eq!("html".parse::<TextFormat>().unwrap(), TextFormat::Html);
        assert!("".parse::<TextFormat>().is_err());
        assert!("false".parse::<TextFormat>().is_err());
    }

    #[test]
    fn language_code_lookup_exposes_names() {
        let code = LanguageCode::from_code("zh-CN").unwrap();
        assert_eq!(code.code(), "zh-CN");
        assert_eq!(code.name(), "Chinese Simplified");
        assert_eq!(code.to_string(), "zh-CN");
        assert!(LanguageCode::from_code("klingon").is_none());
        assert_eq!(LanguageCode::all().count(), 52);
        assert!(matches!(
            LanguageCode::for_field("target", "xx"),
            Err(ValidationError::UnknownLanguage { field: "target", .. })
        ));
    }
}
