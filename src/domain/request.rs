use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ApiKey, LanguageCode, LanguageRestriction, NumberOfResults, SafetyLevel, SearchEngineId,
    SearchQuery, SourceText, SpecUrl, StartIndex, TextFormat,
};

/// A single query-string parameter value before encoding.
///
/// `List` expands to one `key=value` pair per element; `Bool` serializes as the
/// literal `true`/`false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue<'a> {
    Text(&'a str),
    Bool(bool),
    Int(u32),
    List(Vec<&'a str>),
}

/// Ordered request parameters; `None` values are omitted from the URL.
pub type QueryParams<'a> = Vec<(&'static str, Option<QueryValue<'a>>)>;

const ALT_FIELD: &str = "alt";
const PRETTYPRINT_FIELD: &str = "prettyprint";
const FILTER_FIELD: &str = "filter";
const SOURCE_LANGUAGE_FIELD: &str = "source";
const TARGET_LANGUAGE_FIELD: &str = "target";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Custom Search JSON API request.
///
/// Every setter validates its argument, so an instance never holds an invalid
/// value. Required parameters are checked by [`CustomSearch::validate`].
pub struct CustomSearch {
    api_key: Option<ApiKey>,
    search_engine_id: Option<SearchEngineId>,
    spec_url: Option<SpecUrl>,
    filter_duplicates: Option<bool>,
    language_restriction: Option<LanguageRestriction>,
    number_of_results: Option<NumberOfResults>,
    query: Option<SearchQuery>,
    safety_level: Option<SafetyLevel>,
    start_index: Option<StartIndex>,
}

impl CustomSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `CustomSearch::new().query(query)`.
    pub fn with_query(query: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new().query(query)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Result<Self, ValidationError> {
        self.api_key = Some(ApiKey::new(api_key)?);
        Ok(self)
    }

    pub fn search_engine_id(mut self, id: impl Into<String>) -> Result<Self, ValidationError> {
        self.search_engine_id = Some(SearchEngineId::new(id)?);
        Ok(self)
    }

    /// Linked engine spec URL. Ignored on the wire when a search engine id is set.
    pub fn spec_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.spec_url = Some(SpecUrl::new(url)?);
        Ok(self)
    }

    pub fn filter_duplicates(mut self, filter: bool) -> Self {
        self.filter_duplicates = Some(filter);
        self
    }

    pub fn language_restriction(
        mut self,
        restriction: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.language_restriction = Some(LanguageRestriction::new(restriction)?);
        Ok(self)
    }

    pub fn number_of_results(mut self, num: u32) -> Result<Self, ValidationError> {
        self.number_of_results = Some(NumberOfResults::new(num)?);
        Ok(self)
    }

    pub fn query(mut self, query: impl Into<String>) -> Result<Self, ValidationError> {
        self.query = Some(SearchQuery::new(query)?);
        Ok(self)
    }

    pub fn safety_level(mut self, level: SafetyLevel) -> Self {
        self.safety_level = Some(level);
        self
    }

    /// Start index, bounded by `101 - num` for the number of results set so far.
    pub fn start_index(mut self, start: u32) -> Result<Self, ValidationError> {
        self.start_index = Some(StartIndex::new(start, self.number_of_results)?);
        Ok(self)
    }

    pub fn get_api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn get_search_engine_id(&self) -> Option<&SearchEngineId> {
        self.search_engine_id.as_ref()
    }

    pub fn get_spec_url(&self) -> Option<&SpecUrl> {
        self.spec_url.as_ref()
    }

    pub fn get_filter_duplicates(&self) -> Option<bool> {
        self.filter_duplicates
    }

    pub fn get_language_restriction(&self) -> Option<&LanguageRestriction> {
        self.language_restriction.as_ref()
    }

    pub fn get_number_of_results(&self) -> Option<NumberOfResults> {
        self.number_of_results
    }

    pub fn get_query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn get_safety_level(&self) -> Option<SafetyLevel> {
        self.safety_level
    }

    pub fn get_start_index(&self) -> Option<StartIndex> {
        self.start_index
    }

    /// Check that every parameter the API requires is set.
    ///
    /// Order of checks: API key, then search engine id or spec URL, then query.
    /// A start index set before a larger `num` is re-checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_none() {
            return Err(ValidationError::MissingParameter {
                field: ApiKey::FIELD,
            });
        }
        if self.search_engine_id.is_none() && self.spec_url.is_none() {
            return Err(ValidationError::MissingParameter {
                field: SearchEngineId::FIELD,
            });
        }
        if self.query.is_none() {
            return Err(ValidationError::MissingParameter {
                field: SearchQuery::FIELD,
            });
        }
        if let Some(start) = self.start_index {
            StartIndex::new(start.value(), self.number_of_results)?;
        }
        Ok(())
    }

    /// Parameters in wire order.
    pub fn query_params(&self) -> QueryParams<'_> {
        let spec_url = if self.search_engine_id.is_some() {
            None
        } else {
            self.spec_url.as_ref()
        };

        vec![
            (ALT_FIELD, Some(QueryValue::Text("json"))),
            (PRETTYPRINT_FIELD, Some(QueryValue::Bool(false))),
            (SpecUrl::FIELD, spec_url.map(|it| QueryValue::Text(it.as_str()))),
            (
                SearchEngineId::FIELD,
                self.search_engine_id
                    .as_ref()
                    .map(|it| QueryValue::Text(it.as_str())),
            ),
            (
                ApiKey::FIELD,
                self.api_key.as_ref().map(|it| QueryValue::Text(it.as_str())),
            ),
            (
                LanguageRestriction::FIELD,
                self.language_restriction
                    .as_ref()
                    .map(|it| QueryValue::Text(it.as_str())),
            ),
            (
                NumberOfResults::FIELD,
                self.number_of_results.map(|it| QueryValue::Int(it.value())),
            ),
            (
                SearchQuery::FIELD,
                self.query.as_ref().map(|it| QueryValue::Text(it.as_str())),
            ),
            (
                SafetyLevel::FIELD,
                self.safety_level.map(|it| QueryValue::Text(it.as_str())),
            ),
            (
                StartIndex::FIELD,
                self.start_index.map(|it| QueryValue::Int(it.value())),
            ),
            (FILTER_FIELD, self.filter_duplicates.map(QueryValue::Bool)),
        ]
    }

    /// Serialize every currently set parameter onto `base_url`.
    pub fn build_request_url(&self, base_url: &str) -> String {
        crate::transport::build_request_url(base_url, &self.query_params())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Translate API (v2) request.
///
/// Source texts keep their insertion order; the response lists one
/// translation per text in the same order.
pub struct Translate {
    api_key: Option<ApiKey>,
    format: Option<TextFormat>,
    source_texts: Vec<SourceText>,
    source_language: Option<LanguageCode>,
    target_language: Option<LanguageCode>,
}

impl Translate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `Translate::new().add_source_text(text)`.
    pub fn with_text(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new().add_source_text(text)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Result<Self, ValidationError> {
        self.api_key = Some(ApiKey::new(api_key)?);
        Ok(self)
    }

    pub fn format(mut self, format: TextFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn add_source_text(mut self, text: impl Into<String>) -> Result<Self, ValidationError> {
        self.source_texts.push(SourceText::new(text)?);
        Ok(self)
    }

    /// Replace all source texts. The list must be non-empty and no entry may be blank.
    pub fn source_texts<I, S>(mut self, texts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                SourceText::new(text).map_err(|_| ValidationError::EmptyEntry {
                    field: SourceText::FIELD,
                    index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if texts.is_empty() {
            return Err(ValidationError::Empty {
                field: SourceText::FIELD,
            });
        }
        self.source_texts = texts;
        Ok(self)
    }

    /// Source language; leave unset to let the API detect it per text.
    pub fn source_language(mut self, code: &str) -> Result<Self, ValidationError> {
        self.source_language = Some(LanguageCode::for_field(SOURCE_LANGUAGE_FIELD, code)?);
        Ok(self)
    }

    pub fn target_language(mut self, code: &str) -> Result<Self, ValidationError> {
        self.target_language = Some(LanguageCode::for_field(TARGET_LANGUAGE_FIELD, code)?);
        Ok(self)
    }

    pub fn get_api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn get_format(&self) -> Option<TextFormat> {
        self.format
    }

    pub fn get_source_texts(&self) -> &[SourceText] {
        &self.source_texts
    }

    pub fn get_source_language(&self) -> Option<LanguageCode> {
        self.source_language
    }

    pub fn get_target_language(&self) -> Option<LanguageCode> {
        self.target_language
    }

    /// Check that key, at least one source text and the target language are set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_none() {
            return Err(ValidationError::MissingParameter {
                field: ApiKey::FIELD,
            });
        }
        if self.source_texts.is_empty() {
            return Err(ValidationError::MissingParameter {
                field: SourceText::FIELD,
            });
        }
        if self.target_language.is_none() {
            return Err(ValidationError::MissingParameter {
                field: TARGET_LANGUAGE_FIELD,
            });
        }
        Ok(())
    }

    /// Parameters in wire order.
    pub fn query_params(&self) -> QueryParams<'_> {
        let texts = if self.source_texts.is_empty() {
            None
        } else {
            Some(QueryValue::List(
                self.source_texts.iter().map(SourceText::as_str).collect(),
            ))
        };

        vec![
            (PRETTYPRINT_FIELD, Some(QueryValue::Bool(false))),
            (TextFormat::FIELD, self.format.map(|it| QueryValue::Text(it.as_str()))),
            (
                ApiKey::FIELD,
                self.api_key.as_ref().map(|it| QueryValue::Text(it.as_str())),
            ),
            (SourceText::FIELD, texts),
            (
                SOURCE_LANGUAGE_FIELD,
                self.source_language.map(|it| QueryValue::Text(it.code())),
            ),
            (
                TARGET_LANGUAGE_FIELD,
                self.target_language.map(|it| QueryValue::Text(it.code())),
            ),
        ]
    }

    /// Serialize every currently set parameter onto `base_url`.
    pub fn build_request_url(&self, base_url: &str) -> String {
        crate::transport::build_request_url(base_url, &self.query_params())
    }
}
