//! Custom Search response parsers.
//!
//! The root parser checks `kind` before anything else, then delegates each
//! nested record to its own parser.

mod context;
mod item;
mod promotion;
mod query;

use crate::domain::SearchResult;
use crate::transport::envelope::DataParser;
use crate::transport::error::ParseError;
use crate::transport::json::{Object, Record};

use context::parse_context;
use item::parse_item;
use promotion::parse_promotion;
use query::parse_query;

pub use item::ITEM_KIND;

pub const SEARCH_KIND: &str = "customsearch#search";

/// Parses the body of a successful Custom Search response.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomSearchParser;

impl DataParser for CustomSearchParser {
    type Output = SearchResult;

    fn parse(&self, document: &Object) -> Result<SearchResult, ParseError> {
        parse_search_result(document)
    }
}

pub fn parse_search_result(object: &Object) -> Result<SearchResult, ParseError> {
    let record = Record::new("search result", object);

    record.require_literal("kind", SEARCH_KIND)?;

    let queries = record.required_object("queries")?;
    let queries = record.each_wrapped_entry("queries", queries, parse_query)?;

    let promotions = record
        .optional_array("promotions")?
        .map(|values| record.each_object("promotions", values, parse_promotion))
        .transpose()?;

    let context = record
        .optional_object("context")?
        .map(parse_context)
        .transpose()?;

    let items = record
        .optional_array("items")?
        .map(|values| record.each_object("items", values, parse_item))
        .transpose()?;

    tracing::trace!(
        queries = queries.len(),
        promotions = promotions.as_ref().map_or(0, Vec::len),
        items = items.as_ref().map_or(0, Vec::len),
        "parsed custom search result"
    );

    Ok(SearchResult {
        queries,
        promotions,
        context,
        items,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::transport::error::Expected;

    fn parse(value: Value) -> Result<SearchResult, ParseError> {
        parse_search_result(value.as_object().unwrap())
    }

    fn item(title: &str) -> Value {
        json!({
            "kind": "customsearch#result",
            "title": title,
            "htmlTitle": title,
            "link": format!("http://example.com/{title}"),
            "displayLink": "example.com"
        })
    }

    #[test]
    fn parses_queries_context_promotions_and_items() {
        let result = parse(json!({
            "kind": "customsearch#search",
            "url": {"type": "application/json", "template": "https://www.googleapis.com/customsearch/v1?q={searchTerms}"},
            "queries": {
                "request": [{"totalResults": "120", "searchTerms": "flowers", "count": 10, "startIndex": 1}],
                "nextPage": [{"totalResults": "120", "searchTerms": "flowers", "count": 10, "startIndex": 11}]
            },
            "promotions": [{"title": "Promo", "link": "http://example.com/promo", "displayLink": "example.com"}],
            "context": {"title": "My engine"},
            "items": [item("A"), item("B"), item("C")]
        }))
        .unwrap();

        let roles: Vec<_> = result.queries().iter().map(|(role, _)| role.as_str()).collect();
        assert_eq!(roles, ["request", "nextPage"]);
        assert_eq!(result.query("nextPage").and_then(|q| q.start_index()), Some(11));
        assert_eq!(result.query("request").map(|q| q.total_results()), Some(120));

        assert_eq!(result.promotions().unwrap()[0].title(), "Promo");
        assert_eq!(result.context().unwrap().title(), "My engine");

        let titles: Vec<_> = result.items().unwrap().iter().map(|it| it.title()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let result = parse(json!({
            "kind": "customsearch#search",
            "queries": {"request": [{"totalResults": "0"}]}
        }))
        .unwrap();
        assert!(result.promotions().is_none());
        assert!(result.context().is_none());
        assert!(result.items().is_none());
        assert!(!result.has_items());
    }

    #[test]
    fn kind_is_validated_before_queries() {
        assert!(matches!(
            parse(json!({"queries": "garbage"})),
            Err(ParseError::MissingField {
                record: "search result",
                field: "kind"
            })
        ));
        assert!(matches!(
            parse(json!({"kind": "customsearch#result", "queries": "garbage"})),
            Err(ParseError::InvalidField {
                field: "kind",
                expected: Expected::Literal(SEARCH_KIND),
                ..
            })
        ));
    }

    #[test]
    fn queries_must_be_an_object_of_wrapped_queries() {
        assert!(matches!(
            parse(json!({"kind": "customsearch#search"})),
            Err(ParseError::MissingField { field: "queries", .. })
        ));
        assert!(matches!(
            parse(json!({"kind": "customsearch#search", "queries": []})),
            Err(ParseError::InvalidField {
                field: "queries",
                expected: Expected::Object,
                ..
            })
        ));
        assert!(matches!(
            parse(json!({"kind": "customsearch#search", "queries": {"request": {"totalResults": "1"}}})),
            Err(ParseError::InvalidWrapping { field: "queries", .. })
        ));
        assert!(matches!(
            parse(json!({"kind": "customsearch#search", "queries": {"request": [{"count": 1}]}})),
            Err(ParseError::MissingField {
                record: "query",
                field: "totalResults"
            })
        ));
    }

    #[test]
    fn first_invalid_item_aborts_the_parse() {
        let mut broken = item("B");
        broken.as_object_mut().unwrap().remove("link");

        let result = parse(json!({
            "kind": "customsearch#search",
            "queries": {"request": [{"totalResults": "3"}]},
            "items": [item("A"), broken, "not an object"]
        }));
        assert!(matches!(
            result,
            Err(ParseError::MissingField {
                record: "item",
                field: "link"
            })
        ));

        let result = parse(json!({
            "kind": "customsearch#search",
            "queries": {"request": [{"totalResults": "3"}]},
            "items": [item("A"), 42]
        }));
        assert!(matches!(
            result,
            Err(ParseError::InvalidElement {
                field: "items",
                index: 1,
                ..
            })
        ));
    }

    #[test]
    fn section_shapes_are_checked() {
        let base = || json!({"kind": "customsearch#search", "queries": {}});

        let mut value = base();
        value["items"] = json!({});
        assert!(matches!(parse(value), Err(ParseError::InvalidField { field: "items", .. })));

        let mut value = base();
        value["promotions"] = json!("x");
        assert!(matches!(
            parse(value),
            Err(ParseError::InvalidField {
                field: "promotions",
                ..
            })
        ));

        let mut value = base();
        value["context"] = json!([]);
        assert!(matches!(parse(value), Err(ParseError::InvalidField { field: "context", .. })));
    }

    #[test]
    fn parser_is_deterministic() {
        let value = json!({
            "kind": "customsearch#search",
            "queries": {"request": [{"totalResults": "1"}]},
            "items": [item("A")]
        });
        let first = CustomSearchParser.parse(value.as_object().unwrap()).unwrap();
        let second = CustomSearchParser.parse(value.as_object().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
