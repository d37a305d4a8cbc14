use crate::domain::{TranslateResult, Translation};
use crate::transport::envelope::DataParser;
use crate::transport::error::ParseError;
use crate::transport::json::{Object, Record};

/// Parses the body of a successful Translate response.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateParser;

impl DataParser for TranslateParser {
    type Output = TranslateResult;

    fn parse(&self, document: &Object) -> Result<TranslateResult, ParseError> {
        parse_translate_result(document)
    }
}

pub fn parse_translate_result(object: &Object) -> Result<TranslateResult, ParseError> {
    let envelope = Record::new("translate response", object);
    let data = envelope.required_object("data")?;

    let record = Record::new("translate data", data);
    let values = record.required_array("translations")?;
    let translations = record.each_object("translations", values, parse_translation)?;

    tracing::trace!(translations = translations.len(), "parsed translate result");

    Ok(TranslateResult { translations })
}

pub fn parse_translation(object: &Object) -> Result<Translation, ParseError> {
    let record = Record::new("translation", object);

    Ok(Translation {
        translated_text: record.required_string("translatedText")?,
        detected_source_language: record.optional_non_empty_string("detectedSourceLanguage")?,
    })
}
