use crate::error::RenderError;
use crate::model::FieldValues;
use crate::placeholder::{Segment, tokenize};
use crate::validation::missing_fields;

/// Substitute every declared placeholder in `body` with its supplied value.
///
/// All declared fields must have a value; otherwise the complete list of
/// missing names is returned in declared order. Substitution is a single
/// pass over the body, so supplied values are never scanned for further
/// placeholders. Placeholders that are not declared stay in the output as
/// written.
pub fn render(
    body: &str,
    declared: &[String],
    supplied: &FieldValues,
) -> Result<String, RenderError> {
    let missing = missing_fields(declared, supplied);
    if !missing.is_empty() {
        return Err(RenderError::MissingFields(missing));
    }

    let mut output = String::with_capacity(body.len());
    for segment in tokenize(body) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => match supplied.get(name) {
                Some(value) if declared.iter().any(|field| field == name) => {
                    output.push_str(value)
                }
                _ => {
                    output.push('{');
                    output.push_str(name);
                    output.push('}');
                }
            },
        }
    }

    Ok(output)
}
