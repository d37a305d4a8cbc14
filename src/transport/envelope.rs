use serde_json::Value;

use super::error::ParseError;
use super::json::{Object, Record};
use crate::domain::{ApiError, ApiResponse};

/// Converts the top-level object of a successful response into typed data.
pub trait DataParser {
    type Output;

    fn parse(&self, document: &Object) -> Result<Self::Output, ParseError>;
}

/// Decode a raw response body into a success or failure envelope.
///
/// An `error` member always selects the failure path; the data parser is only
/// consulted when it is absent.
pub fn parse_response<P>(parser: &P, body: &str) -> Result<ApiResponse<P::Output>, ParseError>
where
    P: DataParser + ?Sized,
{
    let document: Value =
        serde_json::from_str(body).map_err(|err| ParseError::Undecodable(Some(err)))?;
    let Value::Object(document) = document else {
        return Err(ParseError::Undecodable(None));
    };

    let record = Record::new("response", &document);
    if let Some(error) = record.get("error") {
        let error = error.as_object().ok_or(ParseError::InvalidErrorFormat)?;
        let error = parse_error(error);
        tracing::debug!(code = ?error.code(), message = ?error.message(), "API reported an error");
        return Ok(ApiResponse::Failure(error));
    }

    parser.parse(&document).map(ApiResponse::Success)
}

/// `code` and `message` are optional and never rejected: values that cannot be
/// read as an integer or text are treated as absent.
fn parse_error(error: &Object) -> ApiError {
    let record = Record::new("error", error);
    let code = record.get("code").and_then(error_code);
    let message = record.get("message").and_then(error_message);
    ApiError::new(code, message)
}

fn error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|it| it.fract() == 0.0 && it.abs() < i64::MAX as f64)
                .map(|it| it as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        _ => None,
    }
}
