use crate::domain::{BodyLine, Image, Promotion};
use crate::transport::error::{Expected, ParseError};
use crate::transport::json::{Object, Record};

pub fn parse_promotion(object: &Object) -> Result<Promotion, ParseError> {
    let record = Record::new("promotion", object);

    let title = record.required_non_empty_string("title")?;
    let link = record.required_non_empty_string("link")?;
    let display_link = record.required_non_empty_string("displayLink")?;

    let body_lines = match record.optional_array("bodyLines")? {
        Some([]) => return Err(record.invalid("bodyLines", Expected::NonEmptyArray)),
        Some(lines) => Some(record.each_object("bodyLines", lines, parse_body_line)?),
        None => None,
    };
    let image = record
        .optional_object("image")?
        .map(parse_image)
        .transpose()?;

    Ok(Promotion {
        title,
        link,
        display_link,
        body_lines,
        image,
    })
}

pub fn parse_body_line(object: &Object) -> Result<BodyLine, ParseError> {
    let record = Record::new("body line", object);

    Ok(BodyLine {
        title: record.optional_non_empty_string("title")?,
        url: record.optional_non_empty_string("url")?,
        link: record.optional_non_empty_string("link")?,
    })
}

pub fn parse_image(object: &Object) -> Result<Image, ParseError> {
    let record = Record::new("image", object);

    Ok(Image {
        source: record.required_non_empty_string("source")?,
        width: record.required_positive_int("width")?,
        height: record.required_positive_int("height")?,
    })
}
