//! Field extraction over untyped JSON objects.
//!
//! JSON `null` is treated exactly like an absent field.

use serde_json::{Map, Value};

use super::error::{Expected, ParseError};
use crate::domain::validation::{
    is_non_empty_string, is_non_negative_int, is_one_of, is_positive_int,
};

pub type Object = Map<String, Value>;

/// One JSON object being parsed as the record named `record`.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    record: &'static str,
    fields: &'a Object,
}

impl<'a> Record<'a> {
    pub fn new(record: &'static str, fields: &'a Object) -> Self {
        Self { record, fields }
    }

    pub fn name(&self) -> &'static str {
        self.record
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    pub fn missing(&self, field: &'static str) -> ParseError {
        ParseError::MissingField {
            record: self.record,
            field,
        }
    }

    pub fn invalid(&self, field: &'static str, expected: Expected) -> ParseError {
        ParseError::InvalidField {
            record: self.record,
            field,
            expected,
        }
    }

    pub fn required(&self, field: &'static str) -> Result<&'a Value, ParseError> {
        self.get(field).ok_or_else(|| self.missing(field))
    }

    /// Require `field` to be exactly the string `expected`.
    pub fn require_literal(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        let value = self.required(field)?;
        if !is_one_of(value, &[expected]) {
            return Err(self.invalid(field, Expected::Literal(expected)));
        }
        Ok(())
    }

    pub fn required_string(&self, field: &'static str) -> Result<String, ParseError> {
        let value = self.required(field)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(field, Expected::String))
    }

    pub fn optional_string(&self, field: &'static str) -> Result<Option<String>, ParseError> {
        self.get(field)
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| self.invalid(field, Expected::String))
            })
            .transpose()
    }

    pub fn required_non_empty_string(&self, field: &'static str) -> Result<String, ParseError> {
        let value = self.required(field)?;
        non_empty_string(value).ok_or_else(|| self.invalid(field, Expected::NonEmptyString))
    }

    pub fn optional_non_empty_string(
        &self,
        field: &'static str,
    ) -> Result<Option<String>, ParseError> {
        self.get(field)
            .map(|value| {
                non_empty_string(value).ok_or_else(|| self.invalid(field, Expected::NonEmptyString))
            })
            .transpose()
    }

    pub fn required_positive_int(&self, field: &'static str) -> Result<u64, ParseError> {
        let value = self.required(field)?;
        if !is_positive_int(value) {
            return Err(self.invalid(field, Expected::PositiveInteger));
        }
        value
            .as_u64()
            .ok_or_else(|| self.invalid(field, Expected::PositiveInteger))
    }

    pub fn optional_non_negative_int(&self, field: &'static str) -> Result<Option<u64>, ParseError> {
        self.get(field)
            .map(|value| {
                if !is_non_negative_int(value) {
                    return Err(self.invalid(field, Expected::NonNegativeInteger));
                }
                value
                    .as_u64()
                    .ok_or_else(|| self.invalid(field, Expected::NonNegativeInteger))
            })
            .transpose()
    }

    pub fn required_object(&self, field: &'static str) -> Result<&'a Object, ParseError> {
        let value = self.required(field)?;
        value
            .as_object()
            .ok_or_else(|| self.invalid(field, Expected::Object))
    }

    pub fn optional_object(&self, field: &'static str) -> Result<Option<&'a Object>, ParseError> {
        self.get(field)
            .map(|value| {
                value
                    .as_object()
                    .ok_or_else(|| self.invalid(field, Expected::Object))
            })
            .transpose()
    }

    pub fn required_array(&self, field: &'static str) -> Result<&'a [Value], ParseError> {
        let value = self.required(field)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.invalid(field, Expected::Array))
    }

    pub fn optional_array(&self, field: &'static str) -> Result<Option<&'a [Value]>, ParseError> {
        self.get(field)
            .map(|value| {
                value
                    .as_array()
                    .map(Vec::as_slice)
                    .ok_or_else(|| self.invalid(field, Expected::Array))
            })
            .transpose()
    }

    /// Parse every element of `values` with `parse`, preserving order.
    ///
    /// Elements must be objects. The first failing element aborts the whole
    /// collection with its error.
    pub fn each_object<T, F>(
        &self,
        field: &'static str,
        values: &'a [Value],
        mut parse: F,
    ) -> Result<Vec<T>, ParseError>
    where
        F: FnMut(&'a Object) -> Result<T, ParseError>,
    {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let object = value.as_object().ok_or(ParseError::InvalidElement {
                    record: self.record,
                    field,
                    index,
                    expected: Expected::Object,
                })?;
                parse(object)
            })
            .collect()
    }

    /// Parse a map keyed by dynamic names whose values each wrap exactly one
    /// object in a single-element array (`{"name": [{...}]}`).
    ///
    /// Entries keep document order and key identity.
    pub fn each_wrapped_entry<T, F>(
        &self,
        field: &'static str,
        entries: &'a Object,
        mut parse: F,
    ) -> Result<Vec<(String, T)>, ParseError>
    where
        F: FnMut(&'a Object) -> Result<T, ParseError>,
    {
        entries
            .iter()
            .map(|(key, value)| {
                let object = match value.as_array().map(Vec::as_slice) {
                    Some([Value::Object(object)]) => object,
                    _ => {
                        return Err(ParseError::InvalidWrapping {
                            record: self.record,
                            field,
                            key: key.clone(),
                        });
                    }
                };
                Ok((key.clone(), parse(object)?))
            })
            .collect()
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    if !is_non_empty_string(value) {
        return None;
    }
    value.as_str().map(str::to_owned)
}
