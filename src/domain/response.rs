use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Parsed API response: either typed data or the error the API reported.
///
/// An API-reported error is a normal outcome, not a Rust error; callers branch
/// on the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

/// Error reported by the API inside an `{"error": {...}}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

impl ApiError {
    pub fn new(code: Option<i64>, message: Option<String>) -> Self {
        Self { code, message }
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn serialize_entries<S, T>(entries: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

fn serialize_optional_entries<S, T>(
    entries: &Option<Vec<(String, T)>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match entries {
        Some(entries) => serialize_entries(entries, serializer),
        None => serializer.serialize_none(),
    }
}

/// Custom Search results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(serialize_with = "serialize_entries")]
    pub(crate) queries: Vec<(String, Query)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) promotions: Option<Vec<Promotion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) items: Option<Vec<Item>>,
}

impl SearchResult {
    /// Query metadata keyed by role (`request`, `nextPage`, ...), in document order.
    pub fn queries(&self) -> &[(String, Query)] {
        &self.queries
    }

    pub fn query(&self, role: &str) -> Option<&Query> {
        self.queries
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, query)| query)
    }

    pub fn has_queries(&self) -> bool {
        !self.queries.is_empty()
    }

    pub fn promotions(&self) -> Option<&[Promotion]> {
        self.promotions.as_deref()
    }

    pub fn has_promotions(&self) -> bool {
        self.promotions.as_ref().is_some_and(|it| !it.is_empty())
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|it| !it.is_empty())
    }
}

/// Metadata describing one query role of a search (the request itself, the next page, ...).
///
/// Only `totalResults` is always present; which other fields appear depends on the role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub(crate) total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) search_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) safe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) gl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) lr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hl: Option<String>,
}

impl Query {
    /// Estimated total number of matches.
    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Human-readable description of the query.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Search terms as Google received them.
    pub fn search_terms(&self) -> Option<&str> {
        self.search_terms.as_deref()
    }

    /// Number of results returned for this role.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// 1-based index of the first result.
    pub fn start_index(&self) -> Option<u64> {
        self.start_index
    }

    /// Page number of the first result.
    pub fn start_page(&self) -> Option<u64> {
        self.start_page
    }

    /// Language restriction (`lr`) the query was run with.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Character encoding of the search terms.
    pub fn input_encoding(&self) -> Option<&str> {
        self.input_encoding.as_deref()
    }

    /// Character encoding of the results.
    pub fn output_encoding(&self) -> Option<&str> {
        self.output_encoding.as_deref()
    }

    /// Safety level the search ran with.
    pub fn safe(&self) -> Option<&str> {
        self.safe.as_deref()
    }

    /// Search engine id.
    pub fn cx(&self) -> Option<&str> {
        self.cx.as_deref()
    }

    /// Search engine spec URL.
    pub fn cref(&self) -> Option<&str> {
        self.cref.as_deref()
    }

    /// Sort expression applied to the results.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Duplicate content filter flag (`0` or `1`).
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Geolocation of the end user.
    pub fn gl(&self) -> Option<&str> {
        self.gl.as_deref()
    }

    /// Country restriction.
    pub fn cr(&self) -> Option<&str> {
        self.cr.as_deref()
    }

    /// Language restriction.
    pub fn lr(&self) -> Option<&str> {
        self.lr.as_deref()
    }

    /// Interface language.
    pub fn hl(&self) -> Option<&str> {
        self.hl.as_deref()
    }
}

/// Metadata about the search engine that produced the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Context {
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) facets: Option<Vec<Vec<Facet>>>,
}

impl Context {
    /// Name of the search engine.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Refinement facets, grouped by category.
    pub fn facets(&self) -> Option<&[Vec<Facet>]> {
        self.facets.as_deref()
    }
}

/// A refinement label offered by the search engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facet {
    pub(crate) label: String,
    pub(crate) anchor: Value,
}

impl Facet {
    /// Refinement label to append to a query.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display text for the facet, kept as sent.
    pub fn anchor(&self) -> &Value {
        &self.anchor
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub(crate) title: String,
    pub(crate) html_title: String,
    pub(crate) link: String,
    pub(crate) display_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) html_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cache_id: Option<String>,
    #[serde(
        rename = "pagemap",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_entries"
    )]
    pub(crate) page_maps: Option<Vec<(String, PageMap)>>,
}

impl Item {
    /// Title of the result, plain text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title of the result with HTML highlighting.
    pub fn html_title(&self) -> &str {
        &self.html_title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn display_link(&self) -> &str {
        &self.display_link
    }

    /// Plain-text excerpt of the page.
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    /// Excerpt with HTML highlighting.
    pub fn html_snippet(&self) -> Option<&str> {
        self.html_snippet.as_deref()
    }

    /// Identifier of Google's cached copy of the page.
    pub fn cache_id(&self) -> Option<&str> {
        self.cache_id.as_deref()
    }

    /// PageMaps keyed by extractor name, in document order.
    pub fn page_maps(&self) -> Option<&[(String, PageMap)]> {
        self.page_maps.as_deref()
    }

    /// PageMap produced by the extractor `name`.
    pub fn page_map(&self, name: &str) -> Option<&PageMap> {
        self.page_maps
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, page_map)| page_map)
    }
}

/// Opaque structured metadata attached to a result by one extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageMap(pub(crate) Map<String, Value>);

impl PageMap {
    pub fn properties(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `None` when the property is absent.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// A promoted result configured for the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) display_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body_lines: Option<Vec<BodyLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<Image>,
}

impl Promotion {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn display_link(&self) -> &str {
        &self.display_link
    }

    /// Present only when non-empty.
    pub fn body_lines(&self) -> Option<&[BodyLine]> {
        self.body_lines.as_deref()
    }

    /// Image shown next to the promotion.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }
}

/// One line of a promotion's body. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BodyLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link: Option<String>,
}

impl BodyLine {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// Promotion image with its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub(crate) source: String,
    pub(crate) width: u64,
    pub(crate) height: u64,
}

impl Image {
    /// URL of the image.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }
}

/// Translate results, one per source text in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResult {
    pub(crate) translations: Vec<Translation>,
}

impl TranslateResult {
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}

/// One translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub(crate) translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) detected_source_language: Option<String>,
}

impl Translation {
    /// May be empty.
    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Only reported when the request left the source language unset.
    pub fn detected_source_language(&self) -> Option<&str> {
        self.detected_source_language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_accessors_follow_variant() {
        let ok: ApiResponse<u8> = ApiResponse::Success(1);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&1));
        assert!(ok.error().is_none());

        let failed: ApiResponse<u8> =
            ApiResponse::Failure(ApiError::new(Some(403), Some("Forbidden".to_owned())));
        assert!(!failed.is_success());
        assert!(failed.data().is_none());
        assert_eq!(failed.error().and_then(ApiError::code), Some(403));
        assert_eq!(
            failed.into_result().unwrap_err().message(),
            Some("Forbidden")
        );
    }

    #[test]
    fn search_result_lookups_preserve_order() {
        let result = SearchResult {
            queries: vec![
                ("request".to_owned(), Query::default()),
                (
                    "nextPage".to_owned(),
                    Query {
                        start_index: Some(11),
                        ..Default::default()
                    },
                ),
            ],
            promotions: None,
            context: None,
            items: Some(Vec::new()),
        };
        assert!(result.has_queries());
        assert_eq!(result.queries()[1].0, "nextPage");
        assert_eq!(result.query("nextPage").and_then(Query::start_index), Some(11));
        assert!(result.query("previousPage").is_none());
        assert!(!result.has_promotions());
        assert!(!result.has_items());
    }

    #[test]
    fn page_map_property_lookup() {
        let mut map = Map::new();
        map.insert("src".to_owned(), json!("http://example.com/a.png"));
        let page_map = PageMap(map);
        assert_eq!(
            page_map.get_property("src"),
            Some(&json!("http://example.com/a.png"))
        );
        assert!(page_map.get_property("missing").is_none());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let item = Item {
            title: "t".to_owned(),
            html_title: "<b>t</b>".to_owned(),
            link: "http://example.com/".to_owned(),
            display_link: "example.com".to_owned(),
            snippet: None,
            html_snippet: None,
            cache_id: Some("abc".to_owned()),
            page_maps: Some(vec![("metatags".to_owned(), PageMap::default())]),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "title": "t",
                "htmlTitle": "<b>t</b>",
                "link": "http://example.com/",
                "displayLink": "example.com",
                "cacheId": "abc",
                "pagemap": {"metatags": {}}
            })
        );
    }
}
