use crate::domain::{Item, PageMap};
use crate::transport::error::ParseError;
use crate::transport::json::{Object, Record};

pub const ITEM_KIND: &str = "customsearch#result";

pub fn parse_item(object: &Object) -> Result<Item, ParseError> {
    let record = Record::new("item", object);

    record.require_literal("kind", ITEM_KIND)?;
    let title = record.required_non_empty_string("title")?;
    let html_title = record.required_non_empty_string("htmlTitle")?;
    let link = record.required_non_empty_string("link")?;
    let display_link = record.required_non_empty_string("displayLink")?;
    let snippet = record.optional_non_empty_string("snippet")?;
    let html_snippet = record.optional_non_empty_string("htmlSnippet")?;
    let cache_id = record.optional_non_empty_string("cacheId")?;
    let page_maps = record
        .optional_object("pagemap")?
        .map(|entries| record.each_wrapped_entry("pagemap", entries, parse_page_map))
        .transpose()?;

    Ok(Item {
        title,
        html_title,
        link,
        display_link,
        snippet,
        html_snippet,
        cache_id,
        page_maps,
    })
}

/// PageMaps are opaque: every property is kept as-is.
pub fn parse_page_map(object: &Object) -> Result<PageMap, ParseError> {
    Ok(PageMap(object.clone()))
}
