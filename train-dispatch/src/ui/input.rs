//! Parsing of typed answers to form prompts.

/// A prompt answer that is not a whole number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a whole number (got {input:?})")]
pub struct InputError {
    field: &'static str,
    input: String,
}

/// Parse a required whole number.
pub fn parse_number(field: &'static str, input: &str) -> Result<i32, InputError> {
    input.trim().parse().map_err(|_| InputError {
        field,
        input: input.to_owned(),
    })
}

/// Parse a whole number where a blank answer means zero.
pub fn parse_number_or_zero(field: &'static str, input: &str) -> Result<i32, InputError> {
    if input.trim().is_empty() {
        return Ok(0);
    }
    parse_number(field, input)
}
