//! Transport layer: wire-format details (query strings, response parsing).
//!
//! Parsing is pure: it never performs I/O, never mutates its input and is safe
//! to run concurrently on independent bodies.

mod custom_search;
mod envelope;
mod error;
mod json;
mod query;
mod translate;

pub use custom_search::{CustomSearchParser, ITEM_KIND, SEARCH_KIND};
pub use envelope::{DataParser, parse_response};
pub use error::{Expected, ParseError};
pub use json::Object;
pub use query::build_request_url;
pub use translate::TranslateParser;

use crate::domain::{ApiResponse, SearchResult, TranslateResult};

/// Parse a raw Custom Search response body.
pub fn parse_custom_search_response(body: &str) -> Result<ApiResponse<SearchResult>, ParseError> {
    parse_response(&CustomSearchParser, body)
}

/// Parse a raw Translate response body.
pub fn parse_translate_response(body: &str) -> Result<ApiResponse<TranslateResult>, ParseError> {
    parse_response(&TranslateParser, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"
    {
      "kind": "customsearch#search",
      "url": {
        "type": "application/json",
        "template": "https://www.googleapis.com/customsearch/v1?q={searchTerms}&num={count?}&start={startIndex?}&lr={language?}&safe={safe?}&cx={cx?}&cref={cref?}&sort={sort?}&filter={filter?}&alt=json"
      },
      "queries": {
        "nextPage": [
          {
            "title": "Google Custom Search - flowers",
            "totalResults": "1340000",
            "searchTerms": "flowers",
            "count": 1,
            "startIndex": 2,
            "inputEncoding": "utf8",
            "outputEncoding": "utf8",
            "safe": "off",
            "cx": "013036536707430787589:_pqjad5hr1a"
          }
        ],
        "request": [
          {
            "title": "Google Custom Search - flowers",
            "totalResults": "1340000",
            "searchTerms": "flowers",
            "count": 1,
            "startIndex": 1,
            "inputEncoding": "utf8",
            "outputEncoding": "utf8",
            "safe": "off",
            "cx": "013036536707430787589:_pqjad5hr1a"
          }
        ]
      },
      "context": {
        "title": "Custom Search",
        "facets": [
          [{"label": "gardens", "anchor": "Gardens"}]
        ]
      },
      "items": [
        {
          "kind": "customsearch#result",
          "title": "Flower - Wikipedia, the free encyclopedia",
          "htmlTitle": "<b>Flower</b> - Wikipedia, the free encyclopedia",
          "link": "http://en.wikipedia.org/wiki/Flower",
          "displayLink": "en.wikipedia.org",
          "snippet": "A flower, sometimes known as a bloom or blossom...",
          "htmlSnippet": "A <b>flower</b>, sometimes known as a bloom or blossom...",
          "cacheId": "6aa0ZVbK3bwJ",
          "formattedUrl": "en.wikipedia.org/wiki/Flower",
          "pagemap": {
            "cse_image": [{"src": "http://upload.wikimedia.org/flower.jpg"}]
          }
        }
      ]
    }
    "#;

    #[test]
    fn parses_realistic_custom_search_body() {
        let response = parse_custom_search_response(SEARCH_BODY).unwrap();
        let result = response.data().unwrap();

        let roles: Vec<_> = result.queries().iter().map(|(role, _)| role.as_str()).collect();
        assert_eq!(roles, ["nextPage", "request"]);

        let context = result.context().unwrap();
        assert_eq!(context.facets().unwrap()[0][0].label(), "gardens");

        let item = &result.items().unwrap()[0];
        assert_eq!(item.cache_id(), Some("6aa0ZVbK3bwJ"));
        assert_eq!(
            item.page_map("cse_image")
                .and_then(|it| it.get_property("src"))
                .and_then(|it| it.as_str()),
            Some("http://upload.wikimedia.org/flower.jpg")
        );
    }

    #[test]
    fn parsing_twice_yields_equal_results() {
        let first = parse_custom_search_response(SEARCH_BODY).unwrap();
        let second = parse_custom_search_response(SEARCH_BODY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_minimal_translate_body() {
        let response =
            parse_translate_response(r#"{"data":{"translations":[{"translatedText":"bonjour"}]}}"#)
                .unwrap();
        assert!(response.is_success());
        let translations = response.data().unwrap().translations();
        assert_eq!(translations.len(), 1);
        assert_eq!(translations[0].translated_text(), "bonjour");
        assert_eq!(translations[0].detected_source_language(), None);
    }

    #[test]
    fn error_envelope_is_shared_by_both_apis() {
        let body = r#"{"error":{"code":123,"message":"foo"}}"#;

        let search = parse_custom_search_response(body).unwrap();
        assert!(!search.is_success());
        assert_eq!(search.error().and_then(|it| it.code()), Some(123));

        let translate = parse_translate_response(body).unwrap();
        assert_eq!(translate.error().and_then(|it| it.message()), Some("foo"));
    }

    #[test]
    fn search_body_without_kind_is_rejected() {
        let err = parse_custom_search_response(r#"{"queries":{}}"#).unwrap_err();
        assert_eq!(err.field(), Some("kind"));
    }
}
