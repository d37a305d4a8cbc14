//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
pub mod validation;
mod value;

pub use request::{CustomSearch, QueryParams, QueryValue, Translate};
pub use response::{
    ApiError, ApiResponse, BodyLine, Context, Facet, Image, Item, PageMap, Promotion, Query,
    SearchResult, TranslateResult, Translation,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, LanguageCode, LanguageRestriction, NumberOfResults, SafetyLevel, SearchEngineId,
    SearchQuery, SourceText, SpecUrl, StartIndex, TextFormat,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn custom_search_builder_chains_validated_setters() {
        let request = CustomSearch::with_query("rust")
            .and_then(|it| it.api_key("key"))
            .and_then(|it| it.search_engine_id("engine"))
            .map(|it| it.safety_level(SafetyLevel::Medium))
            .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.get_query().map(SearchQuery::as_str), Some("rust"));
        assert_eq!(request.get_safety_level(), Some(SafetyLevel::Medium));
    }

    #[test]
    fn invalid_setter_input_never_reaches_request() {
        let err = CustomSearch::new().number_of_results(42).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: NumberOfResults::FIELD,
                actual: 42,
                ..
            }
        ));
        assert!(!err.is_missing_parameter());
    }

    #[test]
    fn translate_builder_without_source_language_is_valid() {
        let request = Translate::with_text("hello")
            .and_then(|it| it.api_key("key"))
            .and_then(|it| it.target_language("fr"))
            .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.get_source_language().is_none());
    }
}
