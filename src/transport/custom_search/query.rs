use serde_json::Value;

use crate::domain::Query;
use crate::transport::error::{Expected, ParseError};
use crate::transport::json::{Object, Record};

const RECORD: &str = "query";

pub fn parse_query(object: &Object) -> Result<Query, ParseError> {
    let record = Record::new(RECORD, object);

    let total_results = record.required("totalResults")?;
    let total_results =
        numeric(total_results).ok_or_else(|| record.invalid("totalResults", Expected::Numeric))?;

    Ok(Query {
        total_results,
        title: record.optional_string("title")?,
        search_terms: record.optional_string("searchTerms")?,
        count: record.optional_non_negative_int("count")?,
        start_index: record.optional_non_negative_int("startIndex")?,
        start_page: record.optional_non_negative_int("startPage")?,
        language: record.optional_string("language")?,
        input_encoding: record.optional_string("inputEncoding")?,
        output_encoding: record.optional_string("outputEncoding")?,
        safe: record.optional_string("safe")?,
        cx: record.optional_string("cx")?,
        cref: record.optional_string("cref")?,
        sort: record.optional_string("sort")?,
        filter: record.optional_string("filter")?,
        gl: record.optional_string("gl")?,
        cr: record.optional_string("cr")?,
        lr: record.optional_string("lr")?,
        hl: record.optional_string("hl")?,
    })
}

/// Google reports `totalResults` as a decimal string; plain numbers are accepted
/// too, including exponent or fractional forms with an integral value.
fn numeric(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            text.parse()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64)
        .then_some(value as u64)
}
