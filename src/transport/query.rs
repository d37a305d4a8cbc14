use url::form_urlencoded;

use crate::domain::QueryValue;

/// Append `params` to `base_url` as an `application/x-www-form-urlencoded` query string.
///
/// Parameters without a value are skipped, lists emit one pair per element in
/// order, booleans become `true`/`false`.
pub fn build_request_url(base_url: &str, params: &[(&'static str, Option<QueryValue<'_>>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in params {
        let Some(value) = value else {
            continue;
        };
        match value {
            QueryValue::Text(text) => {
                serializer.append_pair(key, text);
            }
            QueryValue::Bool(flag) => {
                serializer.append_pair(key, if *flag { "true" } else { "false" });
            }
            QueryValue::Int(number) => {
                serializer.append_pair(key, &number.to_string());
            }
            QueryValue::List(items) => {
                for item in items {
                    serializer.append_pair(key, item);
                }
            }
        }
    }

    let query = serializer.finish();
    if query.is_empty() {
        return base_url.to_owned();
    }
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{query}")
}
