use serde_json::Value;

use crate::domain::{Context, Facet};
use crate::transport::error::{Expected, ParseError};
use crate::transport::json::{Object, Record};

pub fn parse_context(object: &Object) -> Result<Context, ParseError> {
    let record = Record::new("context", object);

    let title = record.required_non_empty_string("title")?;
    let facets = match record.optional_array("facets")? {
        None | Some([]) => None,
        Some(groups) => Some(parse_facet_groups(&record, groups)?),
    };

    Ok(Context { title, facets })
}

fn parse_facet_groups<'a>(
    record: &Record<'a>,
    groups: &'a [Value],
) -> Result<Vec<Vec<Facet>>, ParseError> {
    groups
        .iter()
        .enumerate()
        .map(|(group_index, group)| {
            let group = group.as_array().ok_or(ParseError::InvalidElement {
                record: record.name(),
                field: "facets",
                index: group_index,
                expected: Expected::Array,
            })?;
            group
                .iter()
                .enumerate()
                .map(|(index, facet)| {
                    let facet = facet.as_object().ok_or(ParseError::InvalidNestedElement {
                        record: record.name(),
                        field: "facets",
                        group: group_index,
                        index,
                        expected: Expected::Object,
                    })?;
                    parse_facet(facet)
                })
                .collect()
        })
        .collect()
}

pub fn parse_facet(object: &Object) -> Result<Facet, ParseError> {
    let record = Record::new("facet", object);

    Ok(Facet {
        label: record.required_non_empty_string("label")?,
        anchor: record.required("anchor")?.clone(),
    })
}
